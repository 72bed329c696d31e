//! HTTP client for a remote price model.
//!
//! The trained model is served by a separate scoring service. This client
//! posts one feature row per request and reads back one price. Failures
//! are reported, never retried.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use crate::features::FeatureVector;

use super::error::ModelError;
use super::types::{PredictRequestBody, PredictResponseBody};

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 16;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the model client.
#[derive(Debug, Clone)]
pub struct ModelClientConfig {
    /// Base URL of the scoring service; requests go to `{base_url}/predict`
    pub base_url: String,
    /// Optional API key, sent as `x-apikey`
    pub api_key: Option<String>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ModelClientConfig {
    /// Create a new config for the given service URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Authenticate with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Remote price model client.
///
/// Uses a semaphore to bound concurrent scoring requests.
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    predict_url: String,
    semaphore: Arc<Semaphore>,
}

impl ModelClient {
    /// Create a new model client with the given configuration.
    pub fn new(config: ModelClientConfig) -> Result<Self, ModelError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let api_key = HeaderValue::from_str(key).map_err(|_| ModelError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert("x-apikey", api_key);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            predict_url: format!("{}/predict", config.base_url.trim_end_matches('/')),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// The scoring endpoint.
    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Score one feature vector.
    pub async fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ModelError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self
            .http
            .post(&self.predict_url)
            .json(&PredictRequestBody::single(features))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ModelError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: PredictResponseBody =
            serde_json::from_str(&body).map_err(|e| ModelError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let price = parsed
            .first()
            .ok_or_else(|| ModelError::InvalidPrediction("empty predictions".to_string()))?;

        if !price.is_finite() {
            return Err(ModelError::InvalidPrediction(price.to_string()));
        }

        Ok(price)
    }
}
