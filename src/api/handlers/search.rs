use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::search::{
    player_details, search_entities, team_details, EntityKind, PlayerDetails, SearchHit,
    TeamDetails,
};
use crate::infrastructure::repositories::{SqlitePlayerRepository, SqliteTeamRepository};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Type-specific projection for a single search hit
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EntityDetailsResponse {
    Player(PlayerDetails),
    Team(TeamDetails),
}

/// Substring search across players and teams, merged and sorted by name
///
/// GET /api/search?query=...
///
/// An empty or missing query is rejected before the store is touched.
pub async fn search(
    State(pool): State<SqlitePool>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(ApiError::bad_request("Query cannot be empty"));
    }

    let player_repo = SqlitePlayerRepository::new(pool.clone());
    let players: Vec<_> = player_repo
        .find_all()
        .await?
        .into_iter()
        .map(|(player, _)| player)
        .collect();

    let team_repo = SqliteTeamRepository::new(pool);
    let teams = team_repo.find_all().await?;

    let hits = search_entities(&query, &players, &teams).map_err(ApiError::bad_request)?;

    Ok(Json(hits))
}

/// Detail projection for one search hit, by id and type
///
/// GET /api/search/:id?type=Player|Team (case-insensitive)
pub async fn get_entity_details(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(params): Query<DetailsParams>,
) -> Result<Json<EntityDetailsResponse>, ApiError> {
    let kind = params
        .kind
        .ok_or_else(|| ApiError::bad_request("Type parameter is required (Player or Team)"))?
        .parse::<EntityKind>()
        .map_err(ApiError::bad_request)?;

    match kind {
        EntityKind::Player => {
            let player_repo = SqlitePlayerRepository::new(pool.clone());
            let player = player_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApiError::not_found("Player not found"))?;

            let team_repo = SqliteTeamRepository::new(pool);
            let team = team_repo.find_by_id(player.team_id()).await?;

            Ok(Json(EntityDetailsResponse::Player(player_details(
                &player,
                team.as_ref(),
            ))))
        }
        EntityKind::Team => {
            let team_repo = SqliteTeamRepository::new(pool);
            let (team, roster) = team_repo
                .find_with_players(id)
                .await?
                .ok_or_else(|| ApiError::not_found("Team not found"))?;

            Ok(Json(EntityDetailsResponse::Team(team_details(
                &team, &roster,
            ))))
        }
    }
}
