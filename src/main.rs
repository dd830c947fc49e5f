use razzie_api::application::use_cases::ingest_movies::IngestMoviesUseCase;
use razzie_api::domain::error::AppError;
use razzie_api::infrastructure::config::AppConfig;
use razzie_api::infrastructure::db::movies::MovieRepository;
use razzie_api::interfaces::http::start_server;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,razzie_api=debug".into()),
        )
        .try_init();

    let config = AppConfig::load()?;

    let repository = Arc::new(MovieRepository::init(&config.database_url).await?);

    let ingest = IngestMoviesUseCase::new(repository.clone());
    ingest.execute(&config.dataset_path).await?;

    tracing::info!("Serving on http://{}:{}", config.host, config.port);
    let server = start_server(repository, &config.host, config.port)?;
    server.await?;

    Ok(())
}
