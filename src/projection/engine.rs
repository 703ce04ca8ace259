//! Monthly compounding of fixed contributions

use super::{MonthlySeries, Projection, ProjectionInput, ProjectionResult, ProjectionSummary};
use crate::allocation::{AllocationSplit, Asset};
use crate::chart;
use crate::error::ProjectionError;

/// Convert an annual percentage to a simple monthly rate (8.0 -> 0.08 / 12)
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Future value of an ordinary annuity after `month` contributions
///
/// Contributions land at the end of each month. A rate that is not
/// positive accumulates linearly with no growth.
pub fn future_value(contribution: f64, monthly_rate: f64, month: u32) -> f64 {
    if monthly_rate > 0.0 {
        contribution * ((1.0 + monthly_rate).powi(month as i32) - 1.0) / monthly_rate
    } else {
        contribution * month as f64
    }
}

/// Runs the numeric projection for one set of inputs
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    input: ProjectionInput,
}

impl ProjectionEngine {
    pub fn new(input: ProjectionInput) -> Self {
        Self { input }
    }

    /// Value of one asset at the end of every month of the horizon
    pub fn asset_series(&self, asset: Asset, contribution: u64) -> Vec<f64> {
        let rate = monthly_rate(self.input.annual_rate(asset));
        (1..=self.input.months())
            .map(|month| future_value(contribution as f64, rate, month))
            .collect()
    }

    /// Split the contribution, project each asset and summarize
    pub fn project(&self) -> Projection {
        let allocation = AllocationSplit::from_total(self.input.total_monthly);

        let series = MonthlySeries::from_assets(
            self.asset_series(Asset::A, allocation.asset_a),
            self.asset_series(Asset::B, allocation.asset_b),
            self.asset_series(Asset::C, allocation.asset_c),
        );
        let summary = ProjectionSummary::from_series(&allocation, &series);

        log::debug!(
            "Projected {} months: invested={} final={:.2}",
            series.months(),
            summary.total_invested,
            summary.total_asset
        );

        Projection {
            input: self.input.clone(),
            allocation,
            series,
            summary,
        }
    }
}

/// Check `input`, project it and render its chart
pub fn compute(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    input.validate()?;
    let projection = ProjectionEngine::new(input.clone()).project();
    let chart = chart::render(&projection.series, input.years, input.plot_height)?;
    Ok(ProjectionResult { projection, chart })
}
