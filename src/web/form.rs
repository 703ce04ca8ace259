//! Form field decoding and validation
//!
//! Fields arrive as raw text. A missing field takes its default; a present
//! field must coerce to its type and fall in range. Every bad field is
//! reported, not only the first.

use crate::error::{FieldError, InvalidInput};
use crate::projection::{
    ProjectionInput, DEFAULT_PLOT_HEIGHT, DEFAULT_RATE_A, DEFAULT_RATE_B, DEFAULT_RATE_C,
    DEFAULT_TOTAL_MONTHLY, DEFAULT_YEARS,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw submitted values, also used to pre-fill the inputs on the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub total_monthly: Option<String>,
    #[serde(default)]
    pub years: Option<String>,
    #[serde(default)]
    pub rate_a: Option<String>,
    #[serde(default)]
    pub rate_b: Option<String>,
    #[serde(default)]
    pub rate_c: Option<String>,
    #[serde(default)]
    pub plot_height: Option<String>,
}

impl FormFields {
    /// Fields showing the values of an existing input
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            total_monthly: Some(input.total_monthly.to_string()),
            years: Some(input.years.to_string()),
            rate_a: Some(format!("{:?}", input.rate_a)),
            rate_b: Some(format!("{:?}", input.rate_b)),
            rate_c: Some(format!("{:?}", input.rate_c)),
            plot_height: Some(input.plot_height.to_string()),
        }
    }

    /// Fields looked up by name, e.g. from a query string
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let get = |name: &str| lookup(name).map(str::to_string);
        Self {
            total_monthly: get("total_monthly"),
            years: get("years"),
            rate_a: get("rate_a"),
            rate_b: get("rate_b"),
            rate_c: get("rate_c"),
            plot_height: get("plot_height"),
        }
    }

    /// Coerce and range-check every field, merging in defaults
    pub fn validate(&self) -> Result<ProjectionInput, InvalidInput> {
        let mut errors = Vec::new();
        let whole = "must be a whole number of at least 0";
        let number = "must be a number";

        let input = ProjectionInput {
            total_monthly: parse_or_default(
                &mut errors,
                "total_monthly",
                self.total_monthly.as_deref(),
                DEFAULT_TOTAL_MONTHLY,
                whole,
            ),
            years: parse_or_default(&mut errors, "years", self.years.as_deref(), DEFAULT_YEARS, whole),
            rate_a: parse_or_default(&mut errors, "rate_a", self.rate_a.as_deref(), DEFAULT_RATE_A, number),
            rate_b: parse_or_default(&mut errors, "rate_b", self.rate_b.as_deref(), DEFAULT_RATE_B, number),
            rate_c: parse_or_default(&mut errors, "rate_c", self.rate_c.as_deref(), DEFAULT_RATE_C, number),
            plot_height: parse_or_default(
                &mut errors,
                "plot_height",
                self.plot_height.as_deref(),
                DEFAULT_PLOT_HEIGHT,
                number,
            ),
        };

        // A field that failed to parse holds its default, so its range error is skipped
        for err in input.range_errors() {
            if !errors.iter().any(|e| e.field == err.field) {
                errors.push(err);
            }
        }

        if errors.is_empty() {
            Ok(input)
        } else {
            Err(InvalidInput { errors })
        }
    }
}

fn parse_or_default<T: FromStr>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    raw: Option<&str>,
    default: T,
    message: &str,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            errors.push(FieldError::new(field, message));
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields<'a>(pairs: &[(&str, &'a str)]) -> FormFields {
        FormFields::from_lookup(|name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        })
    }

    #[test]
    fn test_empty_submission_uses_defaults() {
        let input = FormFields::default().validate().unwrap();
        assert_eq!(input, ProjectionInput::default());
    }

    #[test]
    fn test_submitted_values_are_coerced() {
        let input = fields(&[
            ("total_monthly", "20000"),
            ("years", " 25 "),
            ("rate_a", "7.5"),
            ("rate_b", "0"),
            ("rate_c", "-3"),
            ("plot_height", "6"),
        ])
        .validate()
        .unwrap();

        assert_eq!(input.total_monthly, 20_000);
        assert_eq!(input.years, 25);
        assert_eq!(input.rate_a, 7.5);
        assert_eq!(input.rate_b, 0.0);
        assert_eq!(input.rate_c, -3.0);
        assert_eq!(input.plot_height, 6.0);
    }

    #[test]
    fn test_every_bad_field_is_reported() {
        let err = fields(&[
            ("total_monthly", "lots"),
            ("years", "ten"),
            ("rate_a", "8%"),
            ("plot_height", "tall"),
        ])
        .validate()
        .unwrap_err();

        assert_eq!(err.errors.len(), 4);
        assert!(err.has_field("total_monthly"));
        assert!(err.has_field("years"));
        assert!(err.has_field("rate_a"));
        assert!(err.has_field("plot_height"));
        assert!(!err.has_field("rate_b"));
    }

    #[test]
    fn test_integer_fields_reject_fractions_and_negatives() {
        let err = fields(&[("total_monthly", "-100"), ("years", "2.5")])
            .validate()
            .unwrap_err();

        assert_eq!(err.errors.len(), 2);
    }

    #[test]
    fn test_blank_field_is_invalid() {
        let err = fields(&[("years", "")]).validate().unwrap_err();
        assert!(err.has_field("years"));
    }

    #[test]
    fn test_range_checks() {
        let err = fields(&[("years", "101"), ("plot_height", "0")])
            .validate()
            .unwrap_err();
        assert!(err.has_field("years"));
        assert!(err.has_field("plot_height"));

        let err = fields(&[("rate_b", "NaN"), ("plot_height", "inf")])
            .validate()
            .unwrap_err();
        assert!(err.has_field("rate_b"));
        assert!(err.has_field("plot_height"));
    }

    #[test]
    fn test_contribution_upper_bound() {
        let err = fields(&[("total_monthly", "18446744073709551615")])
            .validate()
            .unwrap_err();
        assert!(err.has_field("total_monthly"));

        let err = fields(&[("total_monthly", "100000000000000000"), ("years", "100")])
            .validate()
            .unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert!(err.has_field("total_monthly"));

        let input = fields(&[("total_monthly", "1000000000000")]).validate().unwrap();
        assert_eq!(input.total_monthly, 1_000_000_000_000);
    }

    #[test]
    fn test_unparsed_field_reports_one_error() {
        let err = fields(&[("plot_height", "tall")]).validate().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].message, "must be a number");
    }

    #[test]
    fn test_from_lookup_ignores_unknown_names() {
        let shown = fields(&[("years", "3"), ("colour", "blue")]);
        assert_eq!(shown.years.as_deref(), Some("3"));
        assert_eq!(shown.rate_a, None);
    }

    #[test]
    fn test_zero_years_is_accepted() {
        let input = fields(&[("years", "0")]).validate().unwrap();
        assert_eq!(input.months(), 0);
    }

    #[test]
    fn test_from_input_round_trips_defaults() {
        let shown = FormFields::from_input(&ProjectionInput::default());

        assert_eq!(shown.total_monthly.as_deref(), Some("14500"));
        assert_eq!(shown.rate_a.as_deref(), Some("8.0"));
        assert_eq!(shown.plot_height.as_deref(), Some("8"));
        assert_eq!(shown.validate().unwrap(), ProjectionInput::default());
    }
}
