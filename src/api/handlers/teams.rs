use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::repositories::TeamRepository;
use crate::domain::stats::{team_stats_report, TeamStatsReport};
use crate::domain::team::Team;
use crate::infrastructure::repositories::SqliteTeamRepository;

/// Request body for creating or replacing a team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub coach: String,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub draws: i64,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub games_played: i64,
}

impl TeamRequest {
    fn into_domain(self) -> Result<Team, ApiError> {
        Team::new(
            self.name,
            self.coach,
            self.wins,
            self.losses,
            self.draws,
            self.points,
            self.games_played,
        )
        .map_err(ApiError::bad_request)
    }
}

/// Team representation returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub coach: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub points: i64,
    pub games_played: i64,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            coach: team.coach().to_string(),
            wins: team.wins(),
            losses: team.losses(),
            draws: team.draws(),
            points: team.points(),
            games_played: team.games_played(),
        }
    }
}

/// List all teams
///
/// GET /api/teams
pub async fn get_teams(State(pool): State<SqlitePool>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let repo = SqliteTeamRepository::new(pool);
    let teams = repo.find_all().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, ApiError> {
    let repo = SqliteTeamRepository::new(pool);
    let team = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(pool): State<SqlitePool>,
    Json(req): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = req.into_domain()?;

    let repo = SqliteTeamRepository::new(pool);
    let stored = repo.create(&team).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&stored))))
}

/// Replace a team
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(req): Json<TeamRequest>,
) -> Result<StatusCode, ApiError> {
    if req.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::bad_request(
            "ID in the path does not match ID in the team data",
        ));
    }

    let team = req.into_domain()?;
    let team = Team::from_persistence(
        id,
        team.name().to_string(),
        team.coach().to_string(),
        team.wins(),
        team.losses(),
        team.draws(),
        team.points(),
        team.games_played(),
    );

    let repo = SqliteTeamRepository::new(pool);
    repo.update(&team).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a team
///
/// DELETE /api/teams/:id
///
/// Cascades to the team's players and teamsheets; refused with 409 while
/// any match still references the team.
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = SqliteTeamRepository::new(pool);
    repo.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Derived statistics for a team and its current roster
///
/// GET /api/teams/:id/stats
pub async fn get_team_stats(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<TeamStatsReport>, ApiError> {
    let repo = SqliteTeamRepository::new(pool);
    let (team, roster) = repo
        .find_with_players(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(team_stats_report(&team, &roster)))
}
