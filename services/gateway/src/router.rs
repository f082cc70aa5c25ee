use crate::handlers::{account, transfer};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/users", post(account::create_user))
        .route("/users/{user}/balance", get(account::get_balance))
        .route("/users/{user}/deposit", post(account::deposit))
        .route("/users/{user}/withdraw", post(account::withdraw))
        .route("/transfers", post(transfer::create_transfer));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
