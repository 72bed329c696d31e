//! Stop count and travel class.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::UnknownCategory;

/// Number of intermediate stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stops {
    Zero,
    One,
    TwoOrMore,
}

impl Stops {
    pub const ALL: [Stops; 3] = [Stops::Zero, Stops::One, Stops::TwoOrMore];

    /// Parse from the wire label (`zero`, `one`, `two_or_more`).
    pub fn parse(s: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownCategory::new("stops", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stops::Zero => "zero",
            Stops::One => "one",
            Stops::TwoOrMore => "two_or_more",
        }
    }

    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl fmt::Display for Stops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cabin class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelClass {
    Economy,
    Business,
}

impl TravelClass {
    pub const ALL: [TravelClass; 2] = [TravelClass::Economy, TravelClass::Business];

    /// Parse from the wire label (`Economy`, `Business`).
    pub fn parse(s: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownCategory::new("class", s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "Economy",
            TravelClass::Business => "Business",
        }
    }

    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl fmt::Display for TravelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
