//! Portfolio growth projection
//!
//! Projects the month-by-month value of a fixed three-asset savings plan
//! and serves the result as a web form with an embedded chart.

pub mod allocation;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod projection;
pub mod web;

pub use allocation::{AllocationSplit, Asset};
pub use error::{FieldError, InvalidInput, ProjectionError};
pub use projection::{
    compute, Projection, ProjectionEngine, ProjectionInput, ProjectionResult, ProjectionSummary,
};
