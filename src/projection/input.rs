//! Projection parameters

use super::{
    DEFAULT_PLOT_HEIGHT, DEFAULT_RATE_A, DEFAULT_RATE_B, DEFAULT_RATE_C, DEFAULT_TOTAL_MONTHLY,
    DEFAULT_YEARS, MAX_PLOT_HEIGHT, MAX_TOTAL_MONTHLY, MAX_YEARS,
};
use crate::allocation::Asset;
use crate::error::{FieldError, InvalidInput};
use serde::{Deserialize, Serialize};

/// Parameters for one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Total contribution per month, before the 50/30/20 split
    #[serde(default = "default_total_monthly")]
    pub total_monthly: u64,

    /// Horizon in years; the series hold `years * 12` samples
    #[serde(default = "default_years")]
    pub years: u32,

    /// Annual return for asset A, in percent (8.0 = 8%)
    #[serde(default = "default_rate_a")]
    pub rate_a: f64,

    /// Annual return for asset B, in percent
    #[serde(default = "default_rate_b")]
    pub rate_b: f64,

    /// Annual return for asset C, in percent
    #[serde(default = "default_rate_c")]
    pub rate_c: f64,

    /// Chart height in inches
    #[serde(default = "default_plot_height")]
    pub plot_height: f64,
}

fn default_total_monthly() -> u64 { DEFAULT_TOTAL_MONTHLY }
fn default_years() -> u32 { DEFAULT_YEARS }
fn default_rate_a() -> f64 { DEFAULT_RATE_A }
fn default_rate_b() -> f64 { DEFAULT_RATE_B }
fn default_rate_c() -> f64 { DEFAULT_RATE_C }
fn default_plot_height() -> f64 { DEFAULT_PLOT_HEIGHT }

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            total_monthly: DEFAULT_TOTAL_MONTHLY,
            years: DEFAULT_YEARS,
            rate_a: DEFAULT_RATE_A,
            rate_b: DEFAULT_RATE_B,
            rate_c: DEFAULT_RATE_C,
            plot_height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

impl ProjectionInput {
    /// Number of monthly samples in the projection
    pub fn months(&self) -> u32 {
        self.years.saturating_mul(12)
    }

    /// Annual rate in percent for the given asset
    pub fn annual_rate(&self, asset: Asset) -> f64 {
        match asset {
            Asset::A => self.rate_a,
            Asset::B => self.rate_b,
            Asset::C => self.rate_c,
        }
    }

    /// Out-of-range fields, one error per field
    pub fn range_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.total_monthly > MAX_TOTAL_MONTHLY {
            errors.push(FieldError::new(
                "total_monthly",
                format!("must be at most {}", MAX_TOTAL_MONTHLY),
            ));
        }
        if self.years > MAX_YEARS {
            errors.push(FieldError::new("years", format!("must be at most {}", MAX_YEARS)));
        }
        for (field, rate) in [
            ("rate_a", self.rate_a),
            ("rate_b", self.rate_b),
            ("rate_c", self.rate_c),
        ] {
            if !rate.is_finite() {
                errors.push(FieldError::new(field, "must be a finite number"));
            }
        }
        if !(self.plot_height.is_finite()
            && self.plot_height > 0.0
            && self.plot_height <= MAX_PLOT_HEIGHT)
        {
            errors.push(FieldError::new(
                "plot_height",
                format!("must be greater than 0 and at most {}", MAX_PLOT_HEIGHT),
            ));
        }

        errors
    }

    /// Reject inputs outside the supported ranges
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let errors = self.range_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InvalidInput { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let input: ProjectionInput = serde_json::from_str(r#"{"years": 20}"#).unwrap();

        assert_eq!(input.years, 20);
        assert_eq!(input.months(), 240);
        assert_eq!(input.total_monthly, 14_500);
        assert_eq!(input.annual_rate(Asset::C), 10.0);
        assert_eq!(input.plot_height, 8.0);
    }

    #[test]
    fn test_defaults_are_in_range() {
        assert!(ProjectionInput::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_are_reported() {
        let input = ProjectionInput {
            total_monthly: MAX_TOTAL_MONTHLY + 1,
            years: 4_000_000_000,
            rate_a: f64::NAN,
            plot_height: MAX_PLOT_HEIGHT + 0.5,
            ..Default::default()
        };
        let err = input.validate().unwrap_err();

        assert_eq!(err.errors.len(), 4);
        assert!(err.has_field("total_monthly"));
        assert!(err.has_field("years"));
        assert!(err.has_field("rate_a"));
        assert!(err.has_field("plot_height"));
    }

    #[test]
    fn test_largest_accepted_input_stays_exact() {
        let input = ProjectionInput {
            total_monthly: MAX_TOTAL_MONTHLY,
            years: MAX_YEARS,
            ..Default::default()
        };
        assert!(input.validate().is_ok());

        let invested = MAX_TOTAL_MONTHLY * input.months() as u64;
        assert!(invested < 1 << 53);
    }
}
