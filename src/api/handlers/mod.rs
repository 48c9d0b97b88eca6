pub mod matches;
pub mod players;
pub mod search;
pub mod teams;
pub mod teamsheets;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
