use recipe_feed_ingest::controllers::parse::ParseController;
use recipe_feed_ingest::domain::ingestion::IngestionService;
use recipe_feed_ingest::infrastructure::config::{Config, LogFormat};
use recipe_feed_ingest::infrastructure::db::{check_connection, connect};
use recipe_feed_ingest::infrastructure::feed::FeedFetcher;
use recipe_feed_ingest::infrastructure::http::{build_router, start_http_server};
use recipe_feed_ingest::infrastructure::repositories::{MongoRecipeRepository, RecipeRepository};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!("Starting recipe feed ingest on {}", config.bind_address());

    let db = connect(&config.mongo_uri, &config.mongo_database).await?;

    // An unreachable store at boot is fatal.
    check_connection(&db).await?;
    tracing::info!(database = %config.mongo_database, "Connected to MongoDB");

    let db = Arc::new(db);
    let config = Arc::new(config);

    let recipe_repo: Arc<dyn RecipeRepository> = Arc::new(MongoRecipeRepository::new(db.clone()));
    let fetcher = Arc::new(FeedFetcher::new());

    let ingestion_service = Arc::new(IngestionService::new(fetcher, recipe_repo.clone()));
    let parse_controller = Arc::new(ParseController::new(ingestion_service));

    let app = build_router(recipe_repo, parse_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recipe_feed_ingest=debug,tower_http=debug".into());

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
