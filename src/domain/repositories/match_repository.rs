use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::matches::Match;

/// Repository trait for Match entities
///
/// Writes must verify both team references resolve.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Insert a match and return it with its store-assigned id.
    async fn create(&self, fixture: &Match) -> RepositoryResult<Match>;

    /// Find a match by its ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Match>>;

    /// List every match.
    async fn find_all(&self) -> RepositoryResult<Vec<Match>>;

    /// Full-replace update by the match's id.
    async fn update(&self, fixture: &Match) -> RepositoryResult<()>;

    /// Delete a match by ID
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
