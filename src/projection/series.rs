//! Monthly future-value series

use crate::allocation::Asset;
use serde::Serialize;

/// Per-asset and aggregate value at the end of each month
///
/// Index 0 is the end of month 1. All four vectors have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub asset_a: Vec<f64>,
    pub asset_b: Vec<f64>,
    pub asset_c: Vec<f64>,
    pub total: Vec<f64>,
}

impl MonthlySeries {
    /// Build from the three asset series; the total is their elementwise sum
    pub fn from_assets(asset_a: Vec<f64>, asset_b: Vec<f64>, asset_c: Vec<f64>) -> Self {
        debug_assert!(asset_a.len() == asset_b.len() && asset_b.len() == asset_c.len());
        let total = asset_a
            .iter()
            .zip(&asset_b)
            .zip(&asset_c)
            .map(|((a, b), c)| a + b + c)
            .collect();
        Self {
            asset_a,
            asset_b,
            asset_c,
            total,
        }
    }

    pub fn months(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    pub fn asset(&self, asset: Asset) -> &[f64] {
        match asset {
            Asset::A => &self.asset_a,
            Asset::B => &self.asset_b,
            Asset::C => &self.asset_c,
        }
    }

    /// Value after the last month, 0 for an empty horizon
    pub fn final_value(&self, asset: Asset) -> f64 {
        self.asset(asset).last().copied().unwrap_or(0.0)
    }

    pub fn final_total(&self) -> f64 {
        self.total.last().copied().unwrap_or(0.0)
    }

    /// Largest aggregate value, used to scale the chart
    pub fn peak_total(&self) -> f64 {
        self.total.iter().copied().fold(0.0, f64::max)
    }

    /// One row per month for tabular output
    pub fn rows(&self) -> Vec<SeriesRow> {
        (0..self.months())
            .map(|i| SeriesRow {
                month: i as u32 + 1,
                asset_a: self.asset_a[i],
                asset_b: self.asset_b[i],
                asset_c: self.asset_c[i],
                total: self.total[i],
            })
            .collect()
    }
}

/// A single month of the projection, as written to CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRow {
    pub month: u32,
    pub asset_a: f64,
    pub asset_b: f64,
    pub asset_c: f64,
    pub total: f64,
}
