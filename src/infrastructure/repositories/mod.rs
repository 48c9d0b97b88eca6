// SQLite repository implementations

pub mod sqlite_match_repository;
pub mod sqlite_player_repository;
pub mod sqlite_team_repository;
pub mod sqlite_teamsheet_repository;

pub use sqlite_match_repository::SqliteMatchRepository;
pub use sqlite_player_repository::SqlitePlayerRepository;
pub use sqlite_team_repository::SqliteTeamRepository;
pub use sqlite_teamsheet_repository::SqliteTeamsheetRepository;
