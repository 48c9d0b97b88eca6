use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::matches::Match;
use crate::domain::repositories::{MatchRepository, RepositoryError, RepositoryResult};

#[derive(sqlx::FromRow)]
struct MatchRow {
    id: i64,
    date: String,
    home_team_id: i64,
    away_team_id: i64,
    home_score: i64,
    away_score: i64,
}

impl MatchRow {
    fn into_domain(self) -> Match {
        Match::from_persistence(
            self.id,
            self.date,
            self.home_team_id,
            self.away_team_id,
            self.home_score,
            self.away_score,
        )
    }
}

const SELECT_MATCH: &str =
    "SELECT id, date, home_team_id, away_team_id, home_score, away_score FROM matches";

/// SQLite implementation of MatchRepository
pub struct SqliteMatchRepository {
    pool: SqlitePool,
}

impl SqliteMatchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn teams_exist(&self, fixture: &Match) -> RepositoryResult<()> {
        for team_id in [fixture.home_team_id(), fixture.away_team_id()] {
            let found: Option<i64> = sqlx::query_scalar("SELECT id FROM teams WHERE id = ?")
                .bind(team_id)
                .fetch_optional(&self.pool)
                .await?;

            if found.is_none() {
                return Err(RepositoryError::InvalidReference(format!(
                    "Invalid TeamId: {}",
                    team_id
                )));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl MatchRepository for SqliteMatchRepository {
    async fn create(&self, fixture: &Match) -> RepositoryResult<Match> {
        self.teams_exist(fixture).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO matches (date, home_team_id, away_team_id, home_score, away_score)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(fixture.date())
        .bind(fixture.home_team_id())
        .bind(fixture.away_team_id())
        .bind(fixture.home_score())
        .bind(fixture.away_score())
        .execute(&self.pool)
        .await?;

        Ok(Match::from_persistence(
            result.last_insert_rowid(),
            fixture.date().to_string(),
            fixture.home_team_id(),
            fixture.away_team_id(),
            fixture.home_score(),
            fixture.away_score(),
        ))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Match>> {
        let row = sqlx::query_as::<_, MatchRow>(&format!("{} WHERE id = ?", SELECT_MATCH))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(MatchRow::into_domain))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Match>> {
        let rows = sqlx::query_as::<_, MatchRow>(&format!("{} ORDER BY id", SELECT_MATCH))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(MatchRow::into_domain).collect())
    }

    async fn update(&self, fixture: &Match) -> RepositoryResult<()> {
        self.teams_exist(fixture).await?;

        let result = sqlx::query(
            r#"
            UPDATE matches
            SET date = ?, home_team_id = ?, away_team_id = ?, home_score = ?, away_score = ?
            WHERE id = ?
            "#,
        )
        .bind(fixture.date())
        .bind(fixture.home_team_id())
        .bind(fixture.away_team_id())
        .bind(fixture.home_score())
        .bind(fixture.away_score())
        .bind(fixture.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Match not found: {}",
                fixture.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM matches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Match not found: {}",
                id
            )));
        }

        Ok(())
    }
}
