use async_openai::{config::OpenAIConfig, Client};
use link_curator_backend::controllers::{
    links::LinksController, session::SessionController, suggestions::SuggestionsController,
};
use link_curator_backend::domain::links::LinkService;
use link_curator_backend::domain::session::SessionService;
use link_curator_backend::domain::suggestions::{
    AccumulationLimits, LinkSuggestionService, SuggestionAccumulator,
};
use link_curator_backend::infrastructure::config::{Config, LogFormat};
use link_curator_backend::infrastructure::http::{build_router, start_http_server};
use link_curator_backend::infrastructure::repositories::{
    OpenAiChat, OpenAiRelevanceRepository, OpenAiSuggestionRepository, SessionRepository,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Link Curator Backend on {}:{}",
        config.host,
        config.port
    );

    // Create OpenAI client
    let openai_client = Arc::new(Client::with_config(
        OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
    ));
    tracing::info!(model = %config.openai_model, "OpenAI client initialized");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let session_repo = Arc::new(SessionRepository::new(
        config.max_sessions,
        Duration::from_secs(config.session_ttl_minutes * 60),
    ));
    let suggestion_repo = Arc::new(OpenAiSuggestionRepository::new(OpenAiChat::new(
        openai_client.clone(),
        config.openai_model.clone(),
    )));
    let relevance_repo = Arc::new(OpenAiRelevanceRepository::new(OpenAiChat::new(
        openai_client,
        config.openai_model.clone(),
    )));

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let accumulator = SuggestionAccumulator::new(AccumulationLimits {
        max_attempts: config.suggestion_max_attempts,
        ..AccumulationLimits::default()
    });
    let session_service = Arc::new(SessionService::new(session_repo.clone()));
    let link_service = Arc::new(LinkService::new(session_repo.clone(), relevance_repo));
    let suggestion_service = Arc::new(LinkSuggestionService::new(
        session_repo.clone(),
        suggestion_repo,
        accumulator,
    ));

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let session_controller = Arc::new(SessionController::new(session_service));
    let links_controller = Arc::new(LinksController::new(link_service));
    let suggestions_controller = Arc::new(SuggestionsController::new(suggestion_service));

    let app = build_router(
        session_repo,
        session_controller,
        links_controller,
        suggestions_controller,
    );

    // Start HTTP server with all routes
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "link_curator_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
