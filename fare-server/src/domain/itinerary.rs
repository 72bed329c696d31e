//! Candidate itineraries.

use std::fmt;

use chrono::NaiveDate;

use super::airline::Carrier;
use super::city::City;
use super::error::InvalidDate;
use super::stops::{Stops, TravelClass};
use super::time_slot::TimeSlot;

/// Wire format of departure dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a departure date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use fare_server::domain::parse_departure_date;
///
/// assert!(parse_departure_date("2024-03-15").is_ok());
/// assert!(parse_departure_date("2024-02-30").is_err());
/// assert!(parse_departure_date("15/03/2024").is_err());
/// assert!(parse_departure_date(" 2024-03-15").is_err());
/// ```
pub fn parse_departure_date(s: &str) -> Result<NaiveDate, InvalidDate> {
    let invalid = || InvalidDate {
        value: s.to_string(),
    };

    // chrono skips leading whitespace and accepts a signed year
    let bounded_by_digits = s.starts_with(|c: char| c.is_ascii_digit())
        && s.ends_with(|c: char| c.is_ascii_digit());
    if !bounded_by_digits {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// A field every itinerary must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Airline,
    SourceCity,
    DepartureTime,
    Stops,
    ArrivalTime,
    DestinationCity,
    Class,
    DepartureDate,
}

impl RequiredField {
    /// Scan order for presence checking.
    pub const ALL: [RequiredField; 8] = [
        RequiredField::Airline,
        RequiredField::SourceCity,
        RequiredField::DepartureTime,
        RequiredField::Stops,
        RequiredField::ArrivalTime,
        RequiredField::DestinationCity,
        RequiredField::Class,
        RequiredField::DepartureDate,
    ];

    /// Field name as it appears in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Airline => "airline",
            RequiredField::SourceCity => "source_city",
            RequiredField::DepartureTime => "departure_time",
            RequiredField::Stops => "stops",
            RequiredField::ArrivalTime => "arrival_time",
            RequiredField::DestinationCity => "destination_city",
            RequiredField::Class => "class",
            RequiredField::DepartureDate => "departure_date",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed flight, as submitted for pricing.
///
/// Every field is optional: an absent field is reported by validation,
/// not by construction. Categorical fields are already parsed; the
/// departure date is kept as text because an unparseable date is a
/// validation outcome of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    pub airline: Option<Carrier>,
    pub source_city: Option<City>,
    pub destination_city: Option<City>,
    pub departure_time: Option<TimeSlot>,
    pub arrival_time: Option<TimeSlot>,
    pub stops: Option<Stops>,
    pub class: Option<TravelClass>,
    pub departure_date: Option<String>,
}

impl Itinerary {
    /// Whether the given field carries a value.
    pub fn has(&self, field: RequiredField) -> bool {
        match field {
            RequiredField::Airline => self.airline.is_some(),
            RequiredField::SourceCity => self.source_city.is_some(),
            RequiredField::DepartureTime => self.departure_time.is_some(),
            RequiredField::Stops => self.stops.is_some(),
            RequiredField::ArrivalTime => self.arrival_time.is_some(),
            RequiredField::DestinationCity => self.destination_city.is_some(),
            RequiredField::Class => self.class.is_some(),
            RequiredField::DepartureDate => self
                .departure_date
                .as_deref()
                .is_some_and(|d| !d.is_empty()),
        }
    }

    /// The first absent required field, in scan order.
    pub fn first_missing(&self) -> Option<RequiredField> {
        RequiredField::ALL.into_iter().find(|f| !self.has(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Airline;

    fn complete() -> Itinerary {
        Itinerary {
            airline: Some(Carrier::Listed(Airline::Indigo)),
            source_city: Some(City::Delhi),
            destination_city: Some(City::Mumbai),
            departure_time: Some(TimeSlot::Morning),
            arrival_time: Some(TimeSlot::Afternoon),
            stops: Some(Stops::Zero),
            class: Some(TravelClass::Economy),
            departure_date: Some("2024-03-25".into()),
        }
    }

    #[test]
    fn complete_itinerary_has_no_missing_field() {
        assert_eq!(complete().first_missing(), None);
    }

    #[test]
    fn first_missing_follows_scan_order() {
        let mut it = complete();
        it.class = None;
        it.stops = None;
        assert_eq!(it.first_missing(), Some(RequiredField::Stops));

        assert_eq!(
            Itinerary::default().first_missing(),
            Some(RequiredField::Airline)
        );
    }

    #[test]
    fn empty_date_counts_as_missing() {
        let mut it = complete();
        it.departure_date = Some(String::new());
        assert_eq!(it.first_missing(), Some(RequiredField::DepartureDate));
    }

    #[test]
    fn field_names() {
        let names: Vec<&str> = RequiredField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "airline",
                "source_city",
                "departure_time",
                "stops",
                "arrival_time",
                "destination_city",
                "class",
                "departure_date",
            ]
        );
    }

    #[test]
    fn parse_dates() {
        assert_eq!(
            parse_departure_date("2024-03-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert!(parse_departure_date("2024-13-01").is_err());
        assert!(parse_departure_date("not a date").is_err());
        assert!(parse_departure_date("").is_err());
        assert!(parse_departure_date("2024-03-15T10:00").is_err());
        assert!(parse_departure_date(" 2024-03-15").is_err());
        assert!(parse_departure_date("2024-03-15 ").is_err());
        assert!(parse_departure_date("+2024-03-15").is_err());
        assert!(parse_departure_date("-2024-03-15").is_err());
    }
}
