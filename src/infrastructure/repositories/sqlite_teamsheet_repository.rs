use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamsheetRepository};
use crate::domain::teamsheet::{Teamsheet, TeamsheetPlayer};

#[derive(sqlx::FromRow)]
struct SheetRow {
    id: i64,
    team_id: i64,
}

#[derive(sqlx::FromRow)]
struct SlotRow {
    id: i64,
    teamsheet_id: i64,
    team_id: i64,
    player_id: i64,
    assigned_position: String,
}

impl SlotRow {
    fn into_domain(self) -> TeamsheetPlayer {
        TeamsheetPlayer::from_persistence(
            self.id,
            self.teamsheet_id,
            self.team_id,
            self.player_id,
            self.assigned_position,
        )
    }
}

/// SQLite implementation of TeamsheetRepository
///
/// The sheet and its slots are written together; update deletes the old
/// slot rows and inserts the new list in one transaction.
pub struct SqliteTeamsheetRepository {
    pool: SqlitePool,
}

impl SqliteTeamsheetRepository {
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

    async fn slots_for(&self, sheet_id: i64) -> RepositoryResult<Vec<TeamsheetPlayer>> {
        let rows = sqlx::query_as::<_, SlotRow>(
            r#"
            SELECT id, teamsheet_id, team_id, player_id, assigned_position
            FROM teamsheet_players
            WHERE teamsheet_id = ?
            ORDER BY id
            "#,
        )
        .bind(sheet_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SlotRow::into_domain).collect())
    }
}

#[async_trait]
impl TeamsheetRepository for SqliteTeamsheetRepository {
    async fn create(&self, sheet: &Teamsheet) -> RepositoryResult<Teamsheet> {
        if !self.team_exists(sheet.team_id()).await? {
            return Err(RepositoryError::InvalidReference(format!(
                "Invalid TeamId: {}",
                sheet.team_id()
            )));
        }

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO teamsheets (team_id) VALUES (?)")
            .bind(sheet.team_id())
            .execute(&mut *tx)
            .await?;
        let sheet_id = result.last_insert_rowid();

        let mut stored_slots = Vec::with_capacity(sheet.players().len());
        for slot in sheet.players() {
            let inserted = sqlx::query(
                r#"
                INSERT INTO teamsheet_players (teamsheet_id, team_id, player_id, assigned_position)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(sheet_id)
            .bind(slot.team_id())
            .bind(slot.player_id())
            .bind(slot.assigned_position())
            .execute(&mut *tx)
            .await?;

            stored_slots.push(TeamsheetPlayer::from_persistence(
                inserted.last_insert_rowid(),
                sheet_id,
                slot.team_id(),
                slot.player_id(),
                slot.assigned_position().to_string(),
            ));
        }

        tx.commit().await?;

        Ok(Teamsheet::from_persistence(
            sheet_id,
            sheet.team_id(),
            stored_slots,
        ))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Teamsheet>> {
        let row = sqlx::query_as::<_, SheetRow>("SELECT id, team_id FROM teamsheets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let slots = self.slots_for(row.id).await?;

        Ok(Some(Teamsheet::from_persistence(row.id, row.team_id, slots)))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Teamsheet>> {
        let sheets =
            sqlx::query_as::<_, SheetRow>("SELECT id, team_id FROM teamsheets ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        let slots = sqlx::query_as::<_, SlotRow>(
            r#"
            SELECT id, teamsheet_id, team_id, player_id, assigned_position
            FROM teamsheet_players
            ORDER BY teamsheet_id, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i64, Vec<TeamsheetPlayer>> = HashMap::new();
        for slot in slots {
            grouped
                .entry(slot.teamsheet_id)
                .or_default()
                .push(slot.into_domain());
        }

        Ok(sheets
            .into_iter()
            .map(|s| {
                let slots = grouped.remove(&s.id).unwrap_or_default();
                Teamsheet::from_persistence(s.id, s.team_id, slots)
            })
            .collect())
    }

    async fn update(&self, sheet: &Teamsheet) -> RepositoryResult<()> {
        if !self.team_exists(sheet.team_id()).await? {
            return Err(RepositoryError::InvalidReference(format!(
                "Invalid TeamId: {}",
                sheet.team_id()
            )));
        }

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE teamsheets SET team_id = ? WHERE id = ?")
            .bind(sheet.team_id())
            .bind(sheet.id())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Teamsheet not found: {}",
                sheet.id()
            )));
        }

        // Full replace: drop the old slot rows, insert the new list.
        sqlx::query("DELETE FROM teamsheet_players WHERE teamsheet_id = ?")
            .bind(sheet.id())
            .execute(&mut *tx)
            .await?;

        for slot in sheet.players() {
            sqlx::query(
                r#"
                INSERT INTO teamsheet_players (teamsheet_id, team_id, player_id, assigned_position)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(sheet.id())
            .bind(slot.team_id())
            .bind(slot.player_id())
            .bind(slot.assigned_position())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM teamsheet_players WHERE teamsheet_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM teamsheets WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Teamsheet not found: {}",
                id
            )));
        }

        tx.commit().await?;

        Ok(())
    }
}
