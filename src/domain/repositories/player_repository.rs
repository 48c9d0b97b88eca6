use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Repository trait for Player entities
///
/// Writes must verify the player's team reference resolves; reads that join
/// the team use an inner join so a dangling reference surfaces as absent
/// rather than defaulting.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert a player and return it with its store-assigned id.
    async fn create(&self, player: &Player) -> RepositoryResult<Player>;

    /// Find a player by its ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Player>>;

    /// Find a player joined with their team.
    async fn find_with_team(&self, id: i64) -> RepositoryResult<Option<(Player, Team)>>;

    /// List every player, each with their team's name when it resolves.
    async fn find_all(&self) -> RepositoryResult<Vec<(Player, Option<String>)>>;

    /// Full-replace update by the player's id.
    async fn update(&self, player: &Player) -> RepositoryResult<()>;

    /// Delete a player by ID
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
