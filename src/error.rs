//! Error types shared by the engine, the chart renderer and the web layer

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Failure while turning a projection into something displayable
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

/// A single form field that could not be coerced or is out of range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field error found in one submission
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct InvalidInput {
    pub errors: Vec<FieldError>,
}

impl InvalidInput {
    /// Field name -> message, the shape the page and the JSON API both use
    pub fn by_field(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|e| (e.field, e.message.clone()))
            .collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid input:")?;
        for (i, e) in self.errors.iter().enumerate() {
            let sep = if i == 0 { " " } else { "; " };
            write!(f, "{}{} - {}", sep, e.field, e.message)?;
        }
        Ok(())
    }
}
