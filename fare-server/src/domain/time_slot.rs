//! Day-part time slots.
//!
//! The price model does not see clock times. Departures and arrivals are
//! bucketed into six day-parts, which form a cycle: after `Late_Night`
//! comes the next day's `Early_Morning`.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::error::UnknownCategory;

/// Number of slots in one day.
pub const SLOTS_PER_DAY: u8 = 6;

/// Nominal span of one slot.
pub const SLOT_HOURS: i64 = 4;

/// A day-part bucket.
///
/// Ordering follows the day: `EarlyMorning < Morning < ... < LateNight`.
///
/// # Examples
///
/// ```
/// use fare_server::domain::TimeSlot;
///
/// let dep = TimeSlot::parse("Night", "departure_time").unwrap();
/// let arr = TimeSlot::parse("Morning", "arrival_time").unwrap();
///
/// // Night -> Late_Night -> Early_Morning -> Morning
/// assert_eq!(dep.slots_until(arr), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "Early_Morning")]
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    #[serde(rename = "Late_Night")]
    LateNight,
}

impl TimeSlot {
    /// All slots in day order.
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::EarlyMorning,
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
        TimeSlot::LateNight,
    ];

    /// Parse a slot from its wire label.
    ///
    /// `field` names the request field for error reporting.
    pub fn parse(s: &str, field: &'static str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownCategory::new(field, s))
    }

    /// The wire label, e.g. `"Early_Morning"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "Early_Morning",
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
            TimeSlot::LateNight => "Late_Night",
        }
    }

    /// Position within the day, `0..6`. Also the model code.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// The integer code the price model expects.
    pub fn code(&self) -> i64 {
        i64::from(self.ordinal())
    }

    /// Number of slot boundaries crossed going forward from `self` to
    /// `arrival`, wrapping past midnight. Always in `0..6`.
    pub fn slots_until(&self, arrival: TimeSlot) -> u8 {
        let diff = i16::from(arrival.ordinal()) - i16::from(self.ordinal());
        if diff < 0 {
            (diff + i16::from(SLOTS_PER_DAY)) as u8
        } else {
            diff as u8
        }
    }

    /// Approximate flight time from `self` to `arrival`, counting each
    /// slot as [`SLOT_HOURS`] hours.
    pub fn approx_duration_until(&self, arrival: TimeSlot) -> Duration {
        Duration::hours(i64::from(self.slots_until(arrival)) * SLOT_HOURS)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
