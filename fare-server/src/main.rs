use std::process::ExitCode;

use fare_server::cache::CachedPredictor;
use fare_server::config::{ModelSource, ServerConfig};
use fare_server::model::{LinearModel, ModelClient, ModelClientConfig, Predictor};
use fare_server::validation::{RuleBook, Validator};
use fare_server::web::{AppState, Clock, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fare_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the price model (fail fast if unavailable)
    let predictor = match build_predictor(&config.model) {
        Ok(predictor) => predictor,
        Err(e) => {
            error!("Failed to load price model: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Using {}", predictor.describe());

    let predictor = CachedPredictor::new(predictor, &config.cache);
    let validator = Validator::new(RuleBook::standard());

    // Build app state
    let state = AppState::new(validator, predictor, Clock::System);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {e}", config.bind_addr);
            return ExitCode::FAILURE;
        }
    };

    info!("Flight fare estimator listening on http://{}", config.bind_addr);
    info!("  GET  /         - Itinerary form");
    info!("  GET  /health   - Health check");
    info!("  GET  /options  - Selectable values");
    info!("  POST /predict  - Validate and price an itinerary");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn build_predictor(source: &ModelSource) -> Result<Predictor, fare_server::model::ModelError> {
    match source {
        ModelSource::Remote {
            url,
            api_key,
            timeout_secs,
        } => {
            let mut config = ModelClientConfig::new(url).with_timeout(*timeout_secs);
            if let Some(key) = api_key {
                config = config.with_api_key(key);
            }
            Ok(Predictor::Remote(ModelClient::new(config)?))
        }
        ModelSource::File(path) => Ok(Predictor::Linear(LinearModel::from_file(path)?)),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
