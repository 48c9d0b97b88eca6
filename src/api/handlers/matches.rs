use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::matches::Match;
use crate::domain::repositories::MatchRepository;
use crate::infrastructure::repositories::SqliteMatchRepository;

/// Request body for creating or replacing a match
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub id: Option<i64>,
    pub date: String,
    pub home_team_id: i64,
    pub away_team_id: i64,
    #[serde(default)]
    pub home_score: i64,
    #[serde(default)]
    pub away_score: i64,
}

impl MatchRequest {
    fn into_domain(self) -> Result<Match, ApiError> {
        Match::new(
            self.date,
            self.home_team_id,
            self.away_team_id,
            self.home_score,
            self.away_score,
        )
        .map_err(ApiError::bad_request)
    }
}

/// Match representation returned to clients; `result` is derived from the
/// score line on every read, never stored
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: i64,
    pub date: String,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: i64,
    pub away_score: i64,
    pub result: &'static str,
}

impl From<&Match> for MatchResponse {
    fn from(fixture: &Match) -> Self {
        Self {
            id: fixture.id(),
            date: fixture.date().to_string(),
            home_team_id: fixture.home_team_id(),
            away_team_id: fixture.away_team_id(),
            home_score: fixture.home_score(),
            away_score: fixture.away_score(),
            result: fixture.result().as_str(),
        }
    }
}

/// List all matches
///
/// GET /api/matches
pub async fn get_matches(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let repo = SqliteMatchRepository::new(pool);
    let matches = repo.find_all().await?;

    Ok(Json(matches.iter().map(MatchResponse::from).collect()))
}

/// Get a match by ID
///
/// GET /api/matches/:id
pub async fn get_match(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<MatchResponse>, ApiError> {
    let repo = SqliteMatchRepository::new(pool);
    let fixture = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Match not found: {}", id)))?;

    Ok(Json(MatchResponse::from(&fixture)))
}

/// Create a new match
///
/// POST /api/matches
pub async fn create_match(
    State(pool): State<SqlitePool>,
    Json(req): Json<MatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let fixture = req.into_domain()?;

    let repo = SqliteMatchRepository::new(pool);
    let stored = repo.create(&fixture).await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(&stored))))
}

/// Replace a match
///
/// PUT /api/matches/:id
pub async fn update_match(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(req): Json<MatchRequest>,
) -> Result<StatusCode, ApiError> {
    if req.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError::bad_request(
            "ID in the path does not match ID in the match data",
        ));
    }

    let fixture = req.into_domain()?;
    let fixture = Match::from_persistence(
        id,
        fixture.date().to_string(),
        fixture.home_team_id(),
        fixture.away_team_id(),
        fixture.home_score(),
        fixture.away_score(),
    );

    let repo = SqliteMatchRepository::new(pool);
    repo.update(&fixture).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a match
///
/// DELETE /api/matches/:id
pub async fn delete_match(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = SqliteMatchRepository::new(pool);
    repo.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
