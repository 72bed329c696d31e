//! Application state for the web layer.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::cache::CachedPredictor;
use crate::validation::Validator;

/// Source of "today" for validation and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The server's local calendar date
    System,
    /// A fixed date, for tests and replays
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Shared application state.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary validator and its rule tables
    pub validator: Arc<Validator>,

    /// Cached price model
    pub predictor: Arc<CachedPredictor>,

    /// Where "today" comes from
    pub clock: Clock,
}

impl AppState {
    /// Create a new app state.
    pub fn new(validator: Validator, predictor: CachedPredictor, clock: Clock) -> Self {
        Self {
            validator: Arc::new(validator),
            predictor: Arc::new(predictor),
            clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(Clock::Fixed(date).today(), date);
    }
}
