use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a team and return it with its store-assigned id.
    async fn create(&self, team: &Team) -> RepositoryResult<Team>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Team>>;

    /// Find a team together with its current roster, in stored order.
    async fn find_with_players(&self, id: i64) -> RepositoryResult<Option<(Team, Vec<Player>)>>;

    /// List every team.
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Full-replace update by the team's id.
    async fn update(&self, team: &Team) -> RepositoryResult<()>;

    /// Delete a team by ID. Cascades to its players and teamsheets, but is
    /// refused while any match references the team.
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
