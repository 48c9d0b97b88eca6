use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::player::Player;
use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::Team;

use super::sqlite_player_repository::PlayerRow;

#[derive(sqlx::FromRow)]
pub(crate) struct TeamRow {
    pub id: i64,
    pub name: String,
    pub coach: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub points: i64,
    pub games_played: i64,
}

impl TeamRow {
    pub(crate) fn into_domain(self) -> Team {
        Team::from_persistence(
            self.id,
            self.name,
            self.coach,
            self.wins,
            self.losses,
            self.draws,
            self.points,
            self.games_played,
        )
    }
}

const SELECT_TEAM: &str =
    "SELECT id, name, coach, wins, losses, draws, points, games_played FROM teams";

/// SQLite implementation of TeamRepository
///
/// Deleting a team cascades to its players and teamsheets through the
/// schema's foreign keys, but is refused while any match references the
/// team as home or away side.
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn create(&self, team: &Team) -> RepositoryResult<Team> {
        let result = sqlx::query(
            r#"
            INSERT INTO teams (name, coach, wins, losses, draws, points, games_played)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(team.name())
        .bind(team.coach())
        .bind(team.wins())
        .bind(team.losses())
        .bind(team.draws())
        .bind(team.points())
        .bind(team.games_played())
        .execute(&self.pool)
        .await?;

        Ok(Team::from_persistence(
            result.last_insert_rowid(),
            team.name().to_string(),
            team.coach().to_string(),
            team.wins(),
            team.losses(),
            team.draws(),
            team.points(),
            team.games_played(),
        ))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!("{} WHERE id = ?", SELECT_TEAM))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(TeamRow::into_domain))
    }

    async fn find_with_players(&self, id: i64) -> RepositoryResult<Option<(Team, Vec<Player>)>> {
        // Two reads; the reporting path tolerates staleness between them.
        let team = match self.find_by_id(id).await? {
            Some(team) => team,
            None => return Ok(None),
        };

        let players = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, first_name, last_name, position, tries, tackles, carries, team_id
            FROM players
            WHERE team_id = ?
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some((
            team,
            players.into_iter().map(PlayerRow::into_domain).collect(),
        )))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(&format!("{} ORDER BY id", SELECT_TEAM))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TeamRow::into_domain).collect())
    }

    async fn update(&self, team: &Team) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = ?, coach = ?, wins = ?, losses = ?, draws = ?,
                points = ?, games_played = ?
            WHERE id = ?
            "#,
        )
        .bind(team.name())
        .bind(team.coach())
        .bind(team.wins())
        .bind(team.losses())
        .bind(team.draws())
        .bind(team.points())
        .bind(team.games_played())
        .bind(team.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Team not found: {}",
                team.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let fixtures: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM matches WHERE home_team_id = ? OR away_team_id = ?",
        )
        .bind(id)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if fixtures > 0 {
            return Err(RepositoryError::Restricted(format!(
                "Team {} is referenced by {} match(es) and cannot be deleted",
                id, fixtures
            )));
        }

        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Team not found: {}", id)));
        }

        Ok(())
    }
}
