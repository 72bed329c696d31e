//! Domain error types.
//!
//! These errors represent request text that cannot be mapped onto the
//! fixed categorical vocabulary. They are distinct from validation
//! failures, which describe well-formed but implausible itineraries.

/// Error returned when a label is not part of a category's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field}: {value}")]
pub struct UnknownCategory {
    /// Request field the label was read from
    pub field: &'static str,
    /// The offending label
    pub value: String,
}

impl UnknownCategory {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Error returned when a departure date is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure date: {value}")]
pub struct InvalidDate {
    pub value: String,
}
