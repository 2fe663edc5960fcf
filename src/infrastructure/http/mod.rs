use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, parse::ParseController};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::RecipeRepository;
use crate::infrastructure::request_id::request_id_middleware;

/// Assemble all routes around the shared store handle and controllers
pub fn build_router(
    recipe_repo: Arc<dyn RecipeRepository>,
    parse_controller: Arc<ParseController>,
) -> Router {
    let parse_routes = Router::new()
        .route("/parse", post(ParseController::parse))
        .with_state(parse_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(recipe_repo)
        .merge(parse_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
