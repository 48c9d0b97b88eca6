use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::teamsheet::Teamsheet;

/// Repository trait for the Teamsheet aggregate
///
/// A teamsheet is read and written with its full slot list; update replaces
/// the whole list rather than patching individual slots.
#[async_trait]
pub trait TeamsheetRepository: Send + Sync {
    /// Insert a teamsheet with its slots, returning store-assigned ids.
    async fn create(&self, sheet: &Teamsheet) -> RepositoryResult<Teamsheet>;

    /// Find a teamsheet by its ID, with its slots in stored order.
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Teamsheet>>;

    /// List every teamsheet, each with its slots.
    async fn find_all(&self) -> RepositoryResult<Vec<Teamsheet>>;

    /// Replace the teamsheet's slot list and team reference.
    async fn update(&self, sheet: &Teamsheet) -> RepositoryResult<()>;

    /// Delete a teamsheet and its slots by ID
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
