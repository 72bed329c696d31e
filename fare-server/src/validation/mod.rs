//! Itinerary validation.
//!
//! Decides whether a proposed itinerary is physically and commercially
//! plausible before it is priced. Checks run in a fixed order and the
//! first failure wins:
//!
//! 1. origin and destination differ
//! 2. the departure date parses and lies within the booking window
//! 3. the arrival slot follows the departure slot by the route's minimum
//!    flight time
//! 4. the airline flies the route
//! 5. every required field is present
//!
//! A check whose inputs are absent is skipped, leaving the absent field
//! for step 5 to report. Validation is a pure function of the itinerary
//! and the date it is evaluated on.

mod checks;
mod rules;


use chrono::NaiveDate;
use tracing::debug;

use crate::domain::Itinerary;

pub use checks::{
    BOOKING_HORIZON_DAYS, check_departure_date, check_distinct_cities, check_required_fields,
    check_route, check_time_sequence,
};
pub use rules::{DEFAULT_MIN_DURATION_MINS, RuleBook};

/// Result of validating an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// The first rule broken, as a caller-facing message.
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The failure message, if invalid.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }
}

/// Itinerary validator over a fixed rule book.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: RuleBook,
}

impl Validator {
    pub fn new(rules: RuleBook) -> Self {
        Self { rules }
    }

    /// Validate an itinerary as of `today`.
    pub fn validate(&self, itinerary: &Itinerary, today: NaiveDate) -> ValidationOutcome {
        match self.run_checks(itinerary, today) {
            Ok(()) => ValidationOutcome::Valid,
            Err(reason) => {
                debug!(%reason, "itinerary rejected");
                ValidationOutcome::Invalid(reason)
            }
        }
    }

    fn run_checks(&self, itinerary: &Itinerary, today: NaiveDate) -> Result<(), String> {
        let source = itinerary.source_city;
        let destination = itinerary.destination_city;

        if let (Some(source), Some(destination)) = (source, destination) {
            check_distinct_cities(source, destination)?;
        }

        if let Some(date) = itinerary.departure_date.as_deref().filter(|d| !d.is_empty()) {
            check_departure_date(date, today)?;
        }

        if let (Some(departure), Some(arrival), Some(source), Some(destination)) = (
            itinerary.departure_time,
            itinerary.arrival_time,
            source,
            destination,
        ) {
            check_time_sequence(&self.rules, departure, arrival, source, destination)?;
        }

        if let (Some(carrier), Some(source), Some(destination)) =
            (&itinerary.airline, source, destination)
        {
            check_route(&self.rules, carrier, source, destination)?;
        }

        check_required_fields(itinerary)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(RuleBook::standard())
    }
}
