//! Offline linear price model.
//!
//! Loads intercept and per-feature weights from a JSON file and scores
//! feature vectors in-process. This is useful for development and
//! testing without a running scoring service.

use std::path::Path;

use serde::Deserialize;

use crate::features::{FEATURE_COUNT, FeatureVector};

use super::error::ModelError;

/// A linear model: `intercept + Σ weight[i] * feature[i]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    /// Free-form label, shown in logs
    #[serde(default)]
    pub name: Option<String>,
    pub intercept: f64,
    pub weights: [f64; FEATURE_COUNT],
}

impl LinearModel {
    /// Create a model from coefficients.
    pub fn new(intercept: f64, weights: [f64; FEATURE_COUNT]) -> Self {
        Self {
            name: None,
            intercept,
            weights,
        }
    }

    /// Load a model from a JSON coefficients file.
    ///
    /// Expects `{"intercept": <number>, "weights": [<8 numbers>]}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let model_file_error = |message: String| ModelError::ModelFile {
            path: path.display().to_string(),
            message,
        };

        let json = std::fs::read_to_string(path).map_err(|e| model_file_error(e.to_string()))?;
        let model: LinearModel =
            serde_json::from_str(&json).map_err(|e| model_file_error(e.to_string()))?;

        if !model.intercept.is_finite() || model.weights.iter().any(|w| !w.is_finite()) {
            return Err(model_file_error("coefficients must be finite".to_string()));
        }

        Ok(model)
    }

    /// Score one feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let price = features
            .values()
            .iter()
            .zip(self.weights.iter())
            .fold(self.intercept, |acc, (x, w)| acc + (*x as f64) * w);

        if !price.is_finite() {
            return Err(ModelError::InvalidPrediction(price.to_string()));
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn predict_weighted_sum() {
        let model = LinearModel::new(100.0, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, -1.0]);
        let features = FeatureVector::from_raw([1, 0, 1, 0, 2, 2, 0, 11]);

        // 100 + 1 + 0 + 3 + 0 + 10 + 12 + 0 - 11
        assert_eq!(model.predict(&features).unwrap(), 115.0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name": "test", "intercept": 10.5, "weights": [0, 0, 0, 0, 0, 0, 1000, 0]}}"#
        )
        .unwrap();

        let model = LinearModel::from_file(file.path()).unwrap();
        assert_eq!(model.name.as_deref(), Some("test"));

        let business = FeatureVector::from_raw([0, 0, 0, 0, 0, 0, 1, 1]);
        assert_eq!(model.predict(&business).unwrap(), 1010.5);
    }

    #[test]
    fn load_bundled_model() {
        let model = LinearModel::from_file("data/model.json").unwrap();
        let features = FeatureVector::from_raw([1, 0, 1, 0, 2, 2, 0, 11]);
        assert!(model.predict(&features).unwrap() > 0.0);
    }

    #[test]
    fn wrong_weight_count_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"intercept": 1, "weights": [1, 2, 3]}}"#).unwrap();

        let err = LinearModel::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::ModelFile { .. }));
    }

    #[test]
    fn missing_file_rejected() {
        let err = LinearModel::from_file("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
