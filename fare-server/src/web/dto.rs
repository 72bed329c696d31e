//! Data transfer objects for web requests and responses.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Airline, Carrier, City, Itinerary, Stops, TimeSlot, TravelClass, UnknownCategory,
};
use crate::validation::BOOKING_HORIZON_DAYS;

/// Request to price an itinerary.
///
/// Every field is optional here so that absent fields are reported by
/// validation with the field's name, rather than by the JSON parser.
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    pub airline: Option<String>,
    pub source_city: Option<String>,
    pub destination_city: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub stops: Option<String>,
    pub class: Option<String>,

    /// Date in YYYY-MM-DD format
    pub departure_date: Option<String>,
}

impl PredictRequest {
    /// Parse categorical labels into an itinerary.
    ///
    /// Empty strings count as absent. Unknown airline names are kept (they
    /// fail route validation); any other unknown label is an error.
    pub fn to_itinerary(&self) -> Result<Itinerary, UnknownCategory> {
        Ok(Itinerary {
            airline: present(&self.airline).map(Carrier::from_name),
            source_city: present(&self.source_city)
                .map(|s| City::parse(s, "source_city"))
                .transpose()?,
            destination_city: present(&self.destination_city)
                .map(|s| City::parse(s, "destination_city"))
                .transpose()?,
            departure_time: present(&self.departure_time)
                .map(|s| TimeSlot::parse(s, "departure_time"))
                .transpose()?,
            arrival_time: present(&self.arrival_time)
                .map(|s| TimeSlot::parse(s, "arrival_time"))
                .transpose()?,
            stops: present(&self.stops).map(Stops::parse).transpose()?,
            class: present(&self.class).map(TravelClass::parse).transpose()?,
            departure_date: present(&self.departure_date).map(str::to_string),
        })
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Response for a priced itinerary.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Estimated fare, rounded to 2 decimal places
    pub prediction: f64,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Selectable values for each request field.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub airlines: Vec<&'static str>,
    pub cities: Vec<&'static str>,
    pub time_slots: Vec<&'static str>,
    pub stops: Vec<&'static str>,
    pub classes: Vec<&'static str>,

    /// First bookable departure date
    pub earliest_departure: String,

    /// Last bookable departure date
    pub latest_departure: String,
}

impl FormOptions {
    /// Options as of `today`.
    pub fn new(today: NaiveDate) -> Self {
        let latest = today
            .checked_add_days(Days::new(BOOKING_HORIZON_DAYS))
            .unwrap_or(NaiveDate::MAX);

        Self {
            airlines: Airline::ALL.iter().map(Airline::as_str).collect(),
            cities: City::ALL.iter().map(City::as_str).collect(),
            time_slots: TimeSlot::ALL.iter().map(TimeSlot::as_str).collect(),
            stops: Stops::ALL.iter().map(Stops::as_str).collect(),
            classes: TravelClass::ALL.iter().map(TravelClass::as_str).collect(),
            earliest_departure: today.to_string(),
            latest_departure: latest.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequiredField;

    fn request() -> PredictRequest {
        serde_json::from_str(
            r#"{
                "airline": "Indigo",
                "source_city": "Delhi",
                "destination_city": "Mumbai",
                "departure_time": "Morning",
                "arrival_time": "Afternoon",
                "stops": "zero",
                "class": "Economy",
                "departure_date": "2024-03-25"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_complete_request() {
        let it = request().to_itinerary().unwrap();
        assert_eq!(it.airline, Some(Carrier::Listed(Airline::Indigo)));
        assert_eq!(it.source_city, Some(City::Delhi));
        assert_eq!(it.destination_city, Some(City::Mumbai));
        assert_eq!(it.departure_time, Some(TimeSlot::Morning));
        assert_eq!(it.arrival_time, Some(TimeSlot::Afternoon));
        assert_eq!(it.stops, Some(Stops::Zero));
        assert_eq!(it.class, Some(TravelClass::Economy));
        assert_eq!(it.departure_date.as_deref(), Some("2024-03-25"));
        assert_eq!(it.first_missing(), None);
    }

    #[test]
    fn empty_and_absent_fields_are_missing() {
        let mut req = request();
        req.stops = Some(String::new());
        req.class = None;
        let it = req.to_itinerary().unwrap();
        assert_eq!(it.first_missing(), Some(RequiredField::Stops));
        assert_eq!(it.class, None);
    }

    #[test]
    fn unknown_airline_is_kept() {
        let mut req = request();
        req.airline = Some("Kingfisher".into());
        let it = req.to_itinerary().unwrap();
        assert_eq!(it.airline, Some(Carrier::Unlisted("Kingfisher".into())));
    }

    #[test]
    fn unknown_labels_are_errors() {
        let mut req = request();
        req.arrival_time = Some("Noon".into());
        let err = req.to_itinerary().unwrap_err();
        assert_eq!(err.to_string(), "unknown arrival_time: Noon");

        let mut req = request();
        req.class = Some("First".into());
        assert_eq!(req.to_itinerary().unwrap_err().field, "class");
    }

    #[test]
    fn form_options() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let options = FormOptions::new(today);

        assert_eq!(options.airlines.len(), 6);
        assert_eq!(options.cities[0], "Delhi");
        assert_eq!(options.time_slots[5], "Late_Night");
        assert_eq!(options.stops, vec!["zero", "one", "two_or_more"]);
        assert_eq!(options.classes, vec!["Economy", "Business"]);
        assert_eq!(options.earliest_departure, "2024-03-15");
        assert_eq!(options.latest_departure, "2024-09-11");
    }
}
