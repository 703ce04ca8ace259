//! Projection engine for the three-asset monthly contribution plan

mod engine;
mod input;
mod result;
mod series;

pub use engine::{compute, future_value, monthly_rate, ProjectionEngine};
pub use input::ProjectionInput;
pub use result::{AssetSummary, Projection, ProjectionResult, ProjectionSummary};
pub use series::{MonthlySeries, SeriesRow};

// ============================================================================
// Default Form Values
// ============================================================================
// Shown on first load and used for any field a submission leaves out.

/// Default total monthly contribution (NTD)
pub const DEFAULT_TOTAL_MONTHLY: u64 = 14_500;

/// Default projection horizon in years
pub const DEFAULT_YEARS: u32 = 10;

/// Default annual return for asset A, in percent
pub const DEFAULT_RATE_A: f64 = 8.0;

/// Default annual return for asset B, in percent
pub const DEFAULT_RATE_B: f64 = 6.0;

/// Default annual return for asset C, in percent
pub const DEFAULT_RATE_C: f64 = 10.0;

/// Default chart height in inches (at 100 px per inch)
pub const DEFAULT_PLOT_HEIGHT: f64 = 8.0;

/// Largest total monthly contribution accepted
///
/// Keeps `total_invested` exact in both `u64` and `f64` over `MAX_YEARS`.
pub const MAX_TOTAL_MONTHLY: u64 = 1_000_000_000_000;

/// Longest horizon accepted
pub const MAX_YEARS: u32 = 100;

/// Tallest chart accepted, in inches
pub const MAX_PLOT_HEIGHT: f64 = 50.0;
