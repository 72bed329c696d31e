//! Airline types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::UnknownCategory;

/// One of the six carriers the price model was trained on.
///
/// The discriminant is the carrier's model code.
///
/// # Examples
///
/// ```
/// use fare_server::domain::Airline;
///
/// let indigo = Airline::parse("Indigo").unwrap();
/// assert_eq!(indigo.code(), 1);
/// assert_eq!(indigo.as_str(), "Indigo");
///
/// // Labels are case-sensitive
/// assert!(Airline::parse("indigo").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Airline {
    AirAsia,
    Indigo,
    #[serde(rename = "GO_FIRST")]
    GoFirst,
    SpiceJet,
    #[serde(rename = "Air_India")]
    AirIndia,
    Vistara,
}

impl Airline {
    /// All carriers, in model code order.
    pub const ALL: [Airline; 6] = [
        Airline::AirAsia,
        Airline::Indigo,
        Airline::GoFirst,
        Airline::SpiceJet,
        Airline::AirIndia,
        Airline::Vistara,
    ];

    /// Parse a carrier from its wire label.
    pub fn parse(s: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownCategory::new("airline", s))
    }

    /// The wire label, e.g. `"GO_FIRST"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Airline::AirAsia => "AirAsia",
            Airline::Indigo => "Indigo",
            Airline::GoFirst => "GO_FIRST",
            Airline::SpiceJet => "SpiceJet",
            Airline::AirIndia => "Air_India",
            Airline::Vistara => "Vistara",
        }
    }

    /// The integer code the price model expects.
    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The airline named on a request.
///
/// Unknown carrier names are not a malformed request: they are a
/// carrier that operates no routes, and fail route validation with a
/// message naming the carrier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Carrier {
    Listed(Airline),
    Unlisted(String),
}

impl Carrier {
    /// Classify a carrier name. Never fails.
    pub fn from_name(s: &str) -> Self {
        match Airline::parse(s) {
            Ok(airline) => Carrier::Listed(airline),
            Err(_) => Carrier::Unlisted(s.to_string()),
        }
    }

    /// The airline, if it is one the model knows.
    pub fn airline(&self) -> Option<Airline> {
        match self {
            Carrier::Listed(airline) => Some(*airline),
            Carrier::Unlisted(_) => None,
        }
    }

    /// The carrier name as given.
    pub fn name(&self) -> &str {
        match self {
            Carrier::Listed(airline) => airline.as_str(),
            Carrier::Unlisted(name) => name,
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
