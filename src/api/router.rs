use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{self, matches, players, search, teams, teamsheets};

/// Builds the application router with all league routes, CORS and request
/// tracing, sharing the pool as state.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Team routes
        .route("/api/teams", get(teams::get_teams))
        .route("/api/teams", post(teams::create_team))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/teams/:id", put(teams::update_team))
        .route("/api/teams/:id", delete(teams::delete_team))
        .route("/api/teams/:id/stats", get(teams::get_team_stats))
        // Player routes
        .route("/api/players", get(players::get_players))
        .route("/api/players", post(players::create_player))
        .route("/api/players/:id", get(players::get_player))
        .route("/api/players/:id", put(players::update_player))
        .route("/api/players/:id", delete(players::delete_player))
        .route("/api/players/:id/stats", get(players::get_player_stats))
        // Match routes
        .route("/api/matches", get(matches::get_matches))
        .route("/api/matches", post(matches::create_match))
        .route("/api/matches/:id", get(matches::get_match))
        .route("/api/matches/:id", put(matches::update_match))
        .route("/api/matches/:id", delete(matches::delete_match))
        // Teamsheet routes
        .route("/api/teamsheets", get(teamsheets::get_teamsheets))
        .route("/api/teamsheets", post(teamsheets::create_teamsheet))
        .route("/api/teamsheets/:id", get(teamsheets::get_teamsheet))
        .route("/api/teamsheets/:id", put(teamsheets::update_teamsheet))
        .route("/api/teamsheets/:id", delete(teamsheets::delete_teamsheet))
        // Search routes
        .route("/api/search", get(search::search))
        .route("/api/search/:id", get(search::get_entity_details))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(pool)
}
