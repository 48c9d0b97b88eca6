// Repository traits (ports) for the league entities.
// Implementations live in the infrastructure layer.

pub mod match_repository;
pub mod player_repository;
pub mod team_repository;
pub mod teamsheet_repository;

pub use match_repository::MatchRepository;
pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;
pub use teamsheet_repository::TeamsheetRepository;

use thiserror::Error;

/// Errors a repository can surface to callers
///
/// Store failures are kept distinct from missing rows so the HTTP layer can
/// map them to different status codes.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    NotFound(String),

    /// A write referenced a row that does not exist (e.g. a player's team).
    #[error("{0}")]
    InvalidReference(String),

    /// A delete was blocked by rows that still reference the target.
    #[error("{0}")]
    Restricted(String),

    /// Upstream store failure, unrelated to the request's ids.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
