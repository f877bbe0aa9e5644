use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;
use service::AnalysisService;

/// Build the CORS middleware from the configured origin list
///
/// A wildcard list allows any origin (the CORS spec forbids combining a
/// wildcard origin with credentials); an explicit list registers each origin
/// verbatim and enables credentials.
fn cors_from_config(config: &Config) -> Cors {
    if config.allows_any_origin() {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
    } else {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        cors
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // The analysis service compiles its regexes once and is shared read-only
    let analysis_service = web::Data::new(AnalysisService::new());
    let config = web::Data::new(config);

    tracing::info!(
        allowed_origins = ?config.allowed_origins,
        "Starting nlp-api server on {}",
        bind_addr
    );

    HttpServer::new(move || {
        App::new()
            .app_data(analysis_service.clone())
            .app_data(config.clone())
            .wrap(cors_from_config(&config))
            .configure(api::analyze::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
