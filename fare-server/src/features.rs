//! Feature encoding for the price model.
//!
//! The model consumes eight integers in the column order it was trained
//! with: airline, source city, departure slot, stops, arrival slot,
//! destination city, class, and days until departure.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Itinerary, RequiredField, parse_departure_date};

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 8;

/// Errors encoding an itinerary.
///
/// Validated itineraries always encode; these indicate a caller skipped
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("missing required field: {0}")]
    Missing(RequiredField),

    #[error("airline {0} has no model code")]
    UnknownAirline(String),

    #[error("invalid departure date format: {0}")]
    InvalidDate(String),
}

/// Ordered numeric input to the price model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([i64; FEATURE_COUNT]);

impl FeatureVector {
    /// Wrap raw values, already in model column order.
    pub fn from_raw(values: [i64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Encode an itinerary as of `today`.
    ///
    /// The last column is `(departure_date - today).days + 1`.
    pub fn encode(itinerary: &Itinerary, today: NaiveDate) -> Result<Self, EncodeError> {
        let carrier = itinerary
            .airline
            .as_ref()
            .ok_or(EncodeError::Missing(RequiredField::Airline))?;
        let airline = carrier
            .airline()
            .ok_or_else(|| EncodeError::UnknownAirline(carrier.name().to_string()))?;
        let source = itinerary
            .source_city
            .ok_or(EncodeError::Missing(RequiredField::SourceCity))?;
        let departure = itinerary
            .departure_time
            .ok_or(EncodeError::Missing(RequiredField::DepartureTime))?;
        let stops = itinerary
            .stops
            .ok_or(EncodeError::Missing(RequiredField::Stops))?;
        let arrival = itinerary
            .arrival_time
            .ok_or(EncodeError::Missing(RequiredField::ArrivalTime))?;
        let destination = itinerary
            .destination_city
            .ok_or(EncodeError::Missing(RequiredField::DestinationCity))?;
        let class = itinerary
            .class
            .ok_or(EncodeError::Missing(RequiredField::Class))?;
        let date_text = itinerary
            .departure_date
            .as_deref()
            .ok_or(EncodeError::Missing(RequiredField::DepartureDate))?;
        let date = parse_departure_date(date_text)
            .map_err(|e| EncodeError::InvalidDate(e.value))?;

        let date_diff = (date - today).num_days() + 1;

        Ok(Self([
            airline.code(),
            source.source_code(),
            departure.code(),
            stops.code(),
            arrival.code(),
            destination.destination_code(),
            class.code(),
            date_diff,
        ]))
    }

    /// The values in model column order.
    pub fn values(&self) -> &[i64; FEATURE_COUNT] {
        &self.0
    }

    /// Days-until-departure column.
    pub fn date_diff(&self) -> i64 {
        self.0[FEATURE_COUNT - 1]
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
