use std::net::SocketAddr;

use scrumleague_api::{api, infrastructure};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set, using default");
        "sqlite://scrumleague.db".to_string()
    });

    tracing::info!("Connecting to database...");
    let pool = infrastructure::db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected and migrations applied");

    let app = api::router::app(pool);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
