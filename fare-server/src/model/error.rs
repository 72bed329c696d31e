//! Model boundary error types.

use std::fmt;

/// Errors from the price model, local or remote.
#[derive(Debug)]
pub enum ModelError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Model service returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the model service
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// The model answered, but not with a usable price
    InvalidPrediction(String),

    /// A local model file could not be loaded
    ModelFile { path: String, message: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Http(e) => write!(f, "HTTP error: {e}"),
            ModelError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ModelError::ApiError { status, message } => {
                write!(f, "model service error {status}: {message}")
            }
            ModelError::RateLimited => write!(f, "rate limited by model service"),
            ModelError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            ModelError::InvalidPrediction(msg) => write!(f, "invalid prediction: {msg}"),
            ModelError::ModelFile { path, message } => {
                write!(f, "failed to load model from {path}: {message}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        ModelError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::ApiError {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "model service error 500: Internal Server Error"
        );

        let err = ModelError::Json {
            message: "expected f64".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected f64"));

        let err = ModelError::InvalidPrediction("NaN".into());
        assert_eq!(err.to_string(), "invalid prediction: NaN");

        let err = ModelError::ModelFile {
            path: "data/model.json".into(),
            message: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load model from data/model.json: not found"
        );
    }
}
