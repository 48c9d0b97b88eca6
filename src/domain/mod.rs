// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod matches;
pub mod player;
pub mod repositories;
pub mod search;
pub mod stats;
pub mod team;
pub mod teamsheet;

pub use matches::Match;
pub use player::Player;
pub use team::Team;
pub use teamsheet::{Teamsheet, TeamsheetPlayer};
