use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::stats::{player_stats_report, PlayerStatsReport};
use crate::infrastructure::repositories::{SqlitePlayerRepository, SqliteTeamRepository};

/// Request body for creating or replacing a player
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub tries: i64,
    #[serde(default)]
    pub tackles: i64,
    #[serde(default)]
    pub carries: i64,
    pub team_id: i64,
}

impl PlayerRequest {
    fn into_domain(self) -> Result<Player, ApiError> {
        Player::new(
            self.first_name,
            self.last_name,
            self.position,
            self.tries,
            self.tackles,
            self.carries,
            self.team_id,
        )
        .map_err(ApiError::bad_request)
    }
}

/// Player representation returned to clients, with the team name resolved
/// when the reference is intact
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub tries: i64,
    pub tackles: i64,
    pub carries: i64,
    pub team_id: i64,
    pub team_name: Option<String>,
}

impl PlayerResponse {
    fn from_player(player: &Player, team_name: Option<String>) -> Self {
        Self {
            id: player.id(),
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
            position: player.position().to_string(),
            tries: player.tries(),
            tackles: player.tackles(),
            carries: player.carries(),
            team_id: player.team_id(),
            team_name,
        }
    }
}

/// List all players with their team names
///
/// GET /api/players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let repo = SqlitePlayerRepository::new(pool);
    let players = repo.find_all().await?;

    Ok(Json(
        players
            .iter()
            .map(|(player, team_name)| PlayerResponse::from_player(player, team_name.clone()))
            .collect(),
    ))
}

/// Get a player by ID
///
/// GET /api/players/:id
pub async fn get_player(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let repo = SqlitePlayerRepository::new(pool.clone());
    let player = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Player not found: {}", id)))?;

    let team_repo = SqliteTeamRepository::new(pool);
    let team_name = team_repo
        .find_by_id(player.team_id())
        .await?
        .map(|t| t.name().to_string());

    Ok(Json(PlayerResponse::from_player(&player, team_name)))
}

/// Create a new player
///
/// POST /api/players
pub async fn create_player(
    State(pool): State<SqlitePool>,
    Json(req): Json<PlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let player = req.into_domain()?;

    let repo = SqlitePlayerRepository::new(pool.clone());
    let stored = repo.create(&player).await?;

    let team_repo = SqliteTeamRepository::new(pool);
    let team_name = team_repo
        .find_by_id(stored.team_id())
        .await?
        .map(|t| t.name().to_string());

    Ok((
        StatusCode::CREATED,
        Json(PlayerResponse::from_player(&stored, team_name)),
    ))
}

/// Replace a player
///
/// PUT /api/players/:id
pub async fn update_player(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(req): Json<PlayerRequest>,
) -> Result<StatusCode, ApiError> {
    if req.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::bad_request(
            "ID in the path does not match ID in the player data",
        ));
    }

    let player = req.into_domain()?;
    let player = Player::from_persistence(
        id,
        player.first_name().to_string(),
        player.last_name().to_string(),
        player.position().to_string(),
        player.tries(),
        player.tackles(),
        player.carries(),
        player.team_id(),
    );

    let repo = SqlitePlayerRepository::new(pool);
    repo.update(&player).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a player
///
/// DELETE /api/players/:id
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = SqlitePlayerRepository::new(pool);
    repo.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Per-player statistics with games played joined from the player's team
///
/// GET /api/players/:id/stats
///
/// A player whose team reference no longer resolves is a data-integrity
/// fault and is reported as not found, the same as a missing player.
pub async fn get_player_stats(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerStatsReport>, ApiError> {
    let repo = SqlitePlayerRepository::new(pool);
    let (player, team) = repo
        .find_with_team(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Player not found: {}", id)))?;

    Ok(Json(player_stats_report(&player, &team)))
}
