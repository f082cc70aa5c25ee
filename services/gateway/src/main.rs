mod error;
mod handlers;
mod models;
mod router;
mod state;

use banking_engine::Bank;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting banking gateway service");

    let state = AppState::new(Bank::new());
    let app = create_router(state);

    // Overridable for container deployments
    let addr = std::env::var("GATEWAY_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
