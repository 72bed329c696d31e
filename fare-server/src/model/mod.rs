//! Price model boundary.
//!
//! The trained model is a black box from an ordered feature vector to a
//! price. It is reached either over HTTP (a scoring service) or, for
//! development, through an in-process linear model loaded from disk.

mod client;
mod error;
mod linear;
mod types;

pub use client::{ModelClient, ModelClientConfig};
pub use error::ModelError;
pub use linear::LinearModel;
pub use types::{PredictRequestBody, PredictResponseBody};

use crate::features::FeatureVector;

/// A price model.
#[derive(Debug, Clone)]
pub enum Predictor {
    Remote(ModelClient),
    Linear(LinearModel),
}

impl Predictor {
    /// Estimate the price for one feature vector.
    pub async fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        match self {
            Predictor::Remote(client) => client.predict(features).await,
            Predictor::Linear(model) => model.predict(features),
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            Predictor::Remote(client) => format!("remote model at {}", client.predict_url()),
            Predictor::Linear(model) => format!(
                "linear model {}",
                model.name.as_deref().unwrap_or("(unnamed)")
            ),
        }
    }
}
