//! Integer split of the monthly contribution across assets

use super::Asset;
use serde::Serialize;

/// Monthly contribution per asset, truncated to whole currency units
///
/// Truncation can leave the parts summing to less than the requested
/// total. The remainder is dropped, never redistributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationSplit {
    pub asset_a: u64,
    pub asset_b: u64,
    pub asset_c: u64,
}

impl AllocationSplit {
    /// Split `total_monthly` using the fixed per-asset ratios
    pub fn from_total(total_monthly: u64) -> Self {
        let part = |asset: Asset| (total_monthly as f64 * asset.ratio()).trunc() as u64;
        Self {
            asset_a: part(Asset::A),
            asset_b: part(Asset::B),
            asset_c: part(Asset::C),
        }
    }

    pub fn get(&self, asset: Asset) -> u64 {
        match asset {
            Asset::A => self.asset_a,
            Asset::B => self.asset_b,
            Asset::C => self.asset_c,
        }
    }

    /// Sum actually invested each month, saturating at `u64::MAX`
    pub fn monthly_total(&self) -> u64 {
        self.asset_a
            .saturating_add(self.asset_b)
            .saturating_add(self.asset_c)
    }
}
