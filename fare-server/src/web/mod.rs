//! Web layer for the fare estimator.
//!
//! Provides the pricing endpoint, the form page, and form metadata.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Clock};
pub use templates::*;
