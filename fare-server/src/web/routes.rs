//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::domain::UnknownCategory;
use crate::features::{EncodeError, FeatureVector};
use crate::model::ModelError;
use crate::validation::ValidationOutcome;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/options", get(options))
        .route("/predict", post(predict))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the itinerary form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        options: FormOptions::new(state.clock.today()),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Selectable labels and the bookable date range.
async fn options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(FormOptions::new(state.clock.today()))
}

/// Validate an itinerary and estimate its fare.
async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictResponse>, AppError> {
    // Parse JSON manually so a bad body is reported in our error format
    let req: PredictRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "unparseable predict request");
        AppError::MalformedInput {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let itinerary = req.to_itinerary()?;
    let today = state.clock.today();

    if let ValidationOutcome::Invalid(reason) = state.validator.validate(&itinerary, today) {
        return Err(AppError::InvalidItinerary { reason });
    }

    let features = FeatureVector::encode(&itinerary, today)?;
    debug!(%features, "pricing itinerary");

    let price = state.predictor.predict(&features).await?;

    Ok(Json(PredictResponse {
        prediction: round_to_cents(price),
    }))
}

/// Round a price to 2 decimal places.
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Well-formed itinerary that breaks a validation rule
    InvalidItinerary { reason: String },
    /// Request body or labels that cannot be understood
    MalformedInput { message: String },
    /// The price model failed on a valid, encoded itinerary
    UpstreamModelFailure { message: String },
}

impl From<UnknownCategory> for AppError {
    fn from(e: UnknownCategory) -> Self {
        AppError::MalformedInput {
            message: e.to_string(),
        }
    }
}

impl From<EncodeError> for AppError {
    fn from(e: EncodeError) -> Self {
        AppError::MalformedInput {
            message: e.to_string(),
        }
    }
}

impl From<ModelError> for AppError {
    fn from(e: ModelError) -> Self {
        AppError::UpstreamModelFailure {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidItinerary { reason } => (StatusCode::BAD_REQUEST, reason),
            AppError::MalformedInput { message } => {
                warn!(%message, "malformed request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::UpstreamModelFailure { message } => {
                error!(%message, "price model failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
