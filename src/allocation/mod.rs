//! Tracked assets and the fixed contribution split

mod split;

pub use split::AllocationSplit;

use serde::Serialize;

/// One of the three assets the plan contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Asset {
    /// 2330 - TSMC
    A,
    /// 0050 - Yuanta Taiwan 50 ETF
    B,
    /// 00770 - Cathay North America Tech ETF
    C,
}

impl Asset {
    /// All assets in display order
    pub const ALL: [Asset; 3] = [Asset::A, Asset::B, Asset::C];

    /// Share of each monthly contribution assigned to this asset
    pub fn ratio(self) -> f64 {
        match self {
            Asset::A => 0.50,
            Asset::B => 0.30,
            Asset::C => 0.20,
        }
    }

    pub fn ticker(self) -> &'static str {
        match self {
            Asset::A => "2330",
            Asset::B => "0050",
            Asset::C => "00770",
        }
    }

    /// Legend and summary label
    pub fn label(self) -> &'static str {
        match self {
            Asset::A => "2330 - TSMC",
            Asset::B => "0050 - Yuanta Taiwan 50 ETF",
            Asset::C => "00770 - Cathay North America Tech ETF",
        }
    }

    /// Position in per-asset arrays
    pub fn index(self) -> usize {
        match self {
            Asset::A => 0,
            Asset::B => 1,
            Asset::C => 2,
        }
    }
}
