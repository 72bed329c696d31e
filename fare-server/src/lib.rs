//! Flight fare estimation server.
//!
//! Validates that a proposed itinerary is plausible, encodes it as the
//! feature vector a pre-trained price model expects, and returns the
//! model's fare estimate.

pub mod cache;
pub mod config;
pub mod domain;
pub mod features;
pub mod model;
pub mod validation;
pub mod web;
