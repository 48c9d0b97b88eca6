use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError, RepositoryResult};
use crate::domain::team::Team;

use super::sqlite_team_repository::TeamRow;

#[derive(sqlx::FromRow)]
pub(crate) struct PlayerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub tries: i64,
    pub tackles: i64,
    pub carries: i64,
    pub team_id: i64,
}

impl PlayerRow {
    pub(crate) fn into_domain(self) -> Player {
        Player::from_persistence(
            self.id,
            self.first_name,
            self.last_name,
            self.position,
            self.tries,
            self.tackles,
            self.carries,
            self.team_id,
        )
    }
}

#[derive(sqlx::FromRow)]
struct PlayerWithTeamNameRow {
    id: i64,
    first_name: String,
    last_name: String,
    position: String,
    tries: i64,
    tackles: i64,
    carries: i64,
    team_id: i64,
    team_name: Option<String>,
}

const SELECT_PLAYER: &str =
    "SELECT id, first_name, last_name, position, tries, tackles, carries, team_id FROM players";

/// SQLite implementation of PlayerRepository
///
/// Writes verify the team reference up front so a broken reference comes
/// back as InvalidReference rather than a raw foreign-key failure.
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn team_exists(&self, team_id: i64) -> RepositoryResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM teams WHERE id = ?")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn create(&self, player: &Player) -> RepositoryResult<Player> {
        if !self.team_exists(player.team_id()).await? {
            return Err(RepositoryError::InvalidReference(format!(
                "Invalid TeamId: {}",
                player.team_id()
            )));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO players (first_name, last_name, position, tries, tackles, carries, team_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(player.first_name())
        .bind(player.last_name())
        .bind(player.position())
        .bind(player.tries())
        .bind(player.tackles())
        .bind(player.carries())
        .bind(player.team_id())
        .execute(&self.pool)
        .await?;

        Ok(Player::from_persistence(
            result.last_insert_rowid(),
            player.first_name().to_string(),
            player.last_name().to_string(),
            player.position().to_string(),
            player.tries(),
            player.tackles(),
            player.carries(),
            player.team_id(),
        ))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!("{} WHERE id = ?", SELECT_PLAYER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(PlayerRow::into_domain))
    }

    async fn find_with_team(&self, id: i64) -> RepositoryResult<Option<(Player, Team)>> {
        let player = match self.find_by_id(id).await? {
            Some(player) => player,
            // Player gone: plain not-found.
            None => return Ok(None),
        };

        let team = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, coach, wins, losses, draws, points, games_played FROM teams WHERE id = ?",
        )
        .bind(player.team_id())
        .fetch_optional(&self.pool)
        .await?;

        // Team is a required reference; an unresolvable one is a data
        // integrity fault surfaced the same way as a missing player.
        Ok(team.map(|t| (player, t.into_domain())))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<(Player, Option<String>)>> {
        let rows = sqlx::query_as::<_, PlayerWithTeamNameRow>(
            r#"
            SELECT p.id, p.first_name, p.last_name, p.position,
                   p.tries, p.tackles, p.carries, p.team_id,
                   t.name AS team_name
            FROM players p
            LEFT JOIN teams t ON t.id = p.team_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let team_name = r.team_name.clone();
                let player = Player::from_persistence(
                    r.id,
                    r.first_name,
                    r.last_name,
                    r.position,
                    r.tries,
                    r.tackles,
                    r.carries,
                    r.team_id,
                );
                (player, team_name)
            })
            .collect())
    }

    async fn update(&self, player: &Player) -> RepositoryResult<()> {
        if !self.team_exists(player.team_id()).await? {
            return Err(RepositoryError::InvalidReference(format!(
                "Invalid TeamId: {}",
                player.team_id()
            )));
        }

        let result = sqlx::query(
            r#"
            UPDATE players
            SET first_name = ?, last_name = ?, position = ?,
                tries = ?, tackles = ?, carries = ?, team_id = ?
            WHERE id = ?
            "#,
        )
        .bind(player.first_name())
        .bind(player.last_name())
        .bind(player.position())
        .bind(player.tries())
        .bind(player.tackles())
        .bind(player.carries())
        .bind(player.team_id())
        .bind(player.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Player not found: {}",
                player.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Player not found: {}",
                id
            )));
        }

        Ok(())
    }
}
