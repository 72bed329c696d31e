//! City types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::UnknownCategory;

/// A city served by the route network.
///
/// The model was trained with two different encodings for cities,
/// depending on whether the city is the origin or the destination, so
/// there is no single "city code". Use [`City::source_code`] or
/// [`City::destination_code`].
///
/// # Examples
///
/// ```
/// use fare_server::domain::City;
///
/// let mumbai = City::parse("Mumbai", "source_city").unwrap();
/// assert_eq!(mumbai.source_code(), 3);
/// assert_eq!(mumbai.destination_code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    Delhi,
    Hyderabad,
    Bangalore,
    Mumbai,
    Kolkata,
    Chennai,
}

impl City {
    /// All cities, in origin encoding order.
    pub const ALL: [City; 6] = [
        City::Delhi,
        City::Hyderabad,
        City::Bangalore,
        City::Mumbai,
        City::Kolkata,
        City::Chennai,
    ];

    /// All cities, in destination encoding order.
    pub const BY_DESTINATION_CODE: [City; 6] = [
        City::Delhi,
        City::Hyderabad,
        City::Mumbai,
        City::Bangalore,
        City::Chennai,
        City::Kolkata,
    ];

    /// Parse a city from its wire label.
    ///
    /// `field` names the request field for error reporting.
    pub fn parse(s: &str, field: &'static str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory::new(field, s))
    }

    /// Returns the city name.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Delhi => "Delhi",
            City::Hyderabad => "Hyderabad",
            City::Bangalore => "Bangalore",
            City::Mumbai => "Mumbai",
            City::Kolkata => "Kolkata",
            City::Chennai => "Chennai",
        }
    }

    /// Model code when this city is the origin.
    pub fn source_code(&self) -> i64 {
        *self as i64
    }

    /// Model code when this city is the destination.
    pub fn destination_code(&self) -> i64 {
        match self {
            City::Delhi => 0,
            City::Hyderabad => 1,
            City::Mumbai => 2,
            City::Bangalore => 3,
            City::Chennai => 4,
            City::Kolkata => 5,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_cities() {
        for city in City::ALL {
            assert_eq!(City::parse(city.as_str(), "source_city"), Ok(city));
        }
    }

    #[test]
    fn reject_unknown_city_with_field_name() {
        let err = City::parse("Pune", "destination_city").unwrap_err();
        assert_eq!(err.to_string(), "unknown destination_city: Pune");

        assert!(City::parse("delhi", "source_city").is_err());
        assert!(City::parse("New Delhi", "source_city").is_err());
    }

    #[test]
    fn source_codes() {
        let codes: Vec<i64> = City::ALL.iter().map(City::source_code).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn destination_codes_use_their_own_order() {
        for (i, city) in City::BY_DESTINATION_CODE.iter().enumerate() {
            assert_eq!(city.destination_code(), i as i64);
        }

        assert_eq!(City::Mumbai.destination_code(), 2);
        assert_eq!(City::Bangalore.destination_code(), 3);
        assert_eq!(City::Chennai.destination_code(), 4);
        assert_eq!(City::Kolkata.destination_code(), 5);
    }
}
