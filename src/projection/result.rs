//! Projection outputs

use super::{MonthlySeries, ProjectionInput};
use crate::allocation::{AllocationSplit, Asset};
use crate::chart::ChartImage;
use serde::Serialize;

/// Final position of a single asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSummary {
    pub asset: Asset,
    pub label: &'static str,
    /// Contribution per month after truncation
    pub monthly_contribution: u64,
    /// Value after the last month
    pub final_value: f64,
}

/// Headline figures for a projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    pub assets: Vec<AssetSummary>,
    /// Sum of the truncated per-asset contributions
    pub monthly_total: u64,
    /// `monthly_total * months`, saturating at `u64::MAX`
    pub total_invested: u64,
    /// Aggregate value after the last month
    pub total_asset: f64,
    pub total_profit: f64,
    /// Profit as a percentage of the amount invested; 0 if nothing was invested
    pub profit_rate: f64,
}

impl ProjectionSummary {
    pub fn from_series(split: &AllocationSplit, series: &MonthlySeries) -> Self {
        let months = series.months() as u64;
        let monthly_total = split.monthly_total();
        let total_invested = monthly_total.saturating_mul(months);
        let total_asset = series.final_total();
        let total_profit = total_asset - total_invested as f64;
        let profit_rate = if total_invested > 0 {
            total_profit / total_invested as f64 * 100.0
        } else {
            0.0
        };

        let assets = Asset::ALL
            .iter()
            .map(|&asset| AssetSummary {
                asset,
                label: asset.label(),
                monthly_contribution: split.get(asset),
                final_value: series.final_value(asset),
            })
            .collect();

        Self {
            assets,
            monthly_total,
            total_invested,
            total_asset,
            total_profit,
            profit_rate,
        }
    }

    pub fn asset(&self, asset: Asset) -> &AssetSummary {
        &self.assets[asset.index()]
    }
}

/// Numeric projection, before any rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub input: ProjectionInput,
    pub allocation: AllocationSplit,
    pub series: MonthlySeries,
    pub summary: ProjectionSummary,
}

/// Projection plus its rendered chart
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResult {
    #[serde(flatten)]
    pub projection: Projection,
    pub chart: ChartImage,
}
