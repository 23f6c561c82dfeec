use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    health, links::LinksController, session::SessionController,
    suggestions::SuggestionsController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::SessionRepository;
use crate::infrastructure::request_id::request_id_middleware;

/// Build the application router with all routes configured
pub fn build_router(
    session_repo: Arc<SessionRepository>,
    session_controller: Arc<SessionController>,
    links_controller: Arc<LinksController>,
    suggestions_controller: Arc<SuggestionsController>,
) -> Router {
    let session_routes = Router::new()
        .route("/api/sessions", post(SessionController::create_session))
        .route("/api/sessions/:sessionId", delete(SessionController::delete_session))
        .with_state(session_controller);

    let link_routes = Router::new()
        .route("/api/sessions/:sessionId/links", get(LinksController::list_links))
        .route("/api/categories", get(LinksController::list_categories))
        .with_state(links_controller);

    let suggestion_routes = Router::new()
        .route(
            "/api/sessions/:sessionId/suggestions",
            post(SuggestionsController::suggest),
        )
        .with_state(suggestions_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(session_repo)
        .merge(session_routes)
        .merge(link_routes)
        .merge(suggestion_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` on the configured address until the process stops
pub async fn start_http_server(config: Arc<Config>, app: Router) -> anyhow::Result<()> {
    let app = if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
