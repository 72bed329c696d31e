//! Askama templates for the web frontend.

use askama::Template;

use super::dto::FormOptions;

/// Home page with the itinerary form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub options: FormOptions,
}

impl IndexTemplate {
    /// Human-friendly label for a wire value, e.g. `"Early Morning"`.
    pub fn label(&self, value: &str) -> String {
        display_label(value)
    }
}

/// Replace underscores with spaces for display.
pub fn display_label(value: &str) -> String {
    value.replace('_', " ")
}
