use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::repositories::TeamsheetRepository;
use crate::domain::teamsheet::{Teamsheet, TeamsheetPlayer};
use crate::infrastructure::repositories::SqliteTeamsheetRepository;

/// One slot in a teamsheet request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsheetSlotRequest {
    pub player_id: i64,
    #[serde(default)]
    pub team_id: i64,
    pub assigned_position: String,
}

/// Request body for creating or replacing a teamsheet with its slots
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsheetRequest {
    pub id: Option<i64>,
    pub team_id: i64,
    #[serde(default)]
    pub players: Vec<TeamsheetSlotRequest>,
}

impl TeamsheetRequest {
    fn into_domain(self) -> Result<Teamsheet, ApiError> {
        let team_id = self.team_id;
        let slots = self
            .players
            .into_iter()
            .map(|slot| {
                // Slots belong to the sheet's team; a slot-level teamId of 0
                // (or omitted) inherits it.
                let slot_team = if slot.team_id > 0 { slot.team_id } else { team_id };
                TeamsheetPlayer::new(0, slot_team, slot.player_id, slot.assigned_position)
                    .map_err(ApiError::bad_request)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Teamsheet::new(team_id, slots))
    }
}

/// One slot in a teamsheet response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsheetSlotResponse {
    pub id: i64,
    pub teamsheet_id: i64,
    pub team_id: i64,
    pub player_id: i64,
    pub assigned_position: String,
}

/// Teamsheet representation returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsheetResponse {
    pub id: i64,
    pub team_id: i64,
    pub players: Vec<TeamsheetSlotResponse>,
}

impl From<&Teamsheet> for TeamsheetResponse {
    fn from(sheet: &Teamsheet) -> Self {
        Self {
            id: sheet.id(),
            team_id: sheet.team_id(),
            players: sheet
                .players()
                .iter()
                .map(|slot| TeamsheetSlotResponse {
                    id: slot.id(),
                    teamsheet_id: slot.teamsheet_id(),
                    team_id: slot.team_id(),
                    player_id: slot.player_id(),
                    assigned_position: slot.assigned_position().to_string(),
                })
                .collect(),
        }
    }
}

/// List all teamsheets with their slots
///
/// GET /api/teamsheets
pub async fn get_teamsheets(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TeamsheetResponse>>, ApiError> {
    let repo = SqliteTeamsheetRepository::new(pool);
    let sheets = repo.find_all().await?;

    Ok(Json(sheets.iter().map(TeamsheetResponse::from).collect()))
}

/// Get a teamsheet by ID
///
/// GET /api/teamsheets/:id
pub async fn get_teamsheet(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<TeamsheetResponse>, ApiError> {
    let repo = SqliteTeamsheetRepository::new(pool);
    let sheet = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Teamsheet not found: {}", id)))?;

    Ok(Json(TeamsheetResponse::from(&sheet)))
}

/// Create a new teamsheet with its slots
///
/// POST /api/teamsheets
pub async fn create_teamsheet(
    State(pool): State<SqlitePool>,
    Json(req): Json<TeamsheetRequest>,
) -> Result<(StatusCode, Json<TeamsheetResponse>), ApiError> {
    let sheet = req.into_domain()?;

    let repo = SqliteTeamsheetRepository::new(pool);
    let stored = repo.create(&sheet).await?;

    Ok((StatusCode::CREATED, Json(TeamsheetResponse::from(&stored))))
}

/// Replace a teamsheet and its full slot list
///
/// PUT /api/teamsheets/:id
pub async fn update_teamsheet(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(req): Json<TeamsheetRequest>,
) -> Result<StatusCode, ApiError> {
    if req.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::bad_request(
            "ID in the path does not match ID in the teamsheet data",
        ));
    }

    let sheet = req.into_domain()?;
    let sheet = Teamsheet::from_persistence(id, sheet.team_id(), sheet.players().to_vec());

    let repo = SqliteTeamsheetRepository::new(pool);
    repo.update(&sheet).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a teamsheet and its slots
///
/// DELETE /api/teamsheets/:id
pub async fn delete_teamsheet(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = SqliteTeamsheetRepository::new(pool);
    repo.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
