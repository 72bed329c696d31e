//! Domain types for the fare estimator.
//!
//! This module contains the categorical vocabulary the price model was
//! trained on. Every label type parses from its exact wire text and
//! knows its model code, so code that receives these types never has to
//! look a label up again.

mod airline;
mod city;
mod error;
mod itinerary;
mod stops;
mod time_slot;

pub use airline::{Airline, Carrier};
pub use city::City;
pub use error::{InvalidDate, UnknownCategory};
pub use itinerary::{DATE_FORMAT, Itinerary, RequiredField, parse_departure_date};
pub use stops::{Stops, TravelClass};
pub use time_slot::{SLOT_HOURS, SLOTS_PER_DAY, TimeSlot};
