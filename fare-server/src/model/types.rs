//! Wire types for the remote model service.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Scoring request: a batch of one feature row.
#[derive(Debug, Serialize)]
pub struct PredictRequestBody<'a> {
    pub features: [&'a FeatureVector; 1],
}

impl<'a> PredictRequestBody<'a> {
    pub fn single(features: &'a FeatureVector) -> Self {
        Self {
            features: [features],
        }
    }
}

/// Scoring response.
///
/// Services answer either with a single `prediction` or with a
/// `predictions` array holding one value per input row.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictResponseBody {
    Single { prediction: f64 },
    Batch { predictions: Vec<f64> },
}

impl PredictResponseBody {
    /// The price for the single row sent.
    pub fn first(&self) -> Option<f64> {
        match self {
            PredictResponseBody::Single { prediction } => Some(*prediction),
            PredictResponseBody::Batch { predictions } => predictions.first().copied(),
        }
    }
}
