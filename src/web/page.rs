//! HTML page rendering

use super::form::FormFields;
use crate::allocation::Asset;
use crate::error::{InvalidInput, ProjectionError};
use crate::format::{format_percent, format_thousands};
use crate::projection::{ProjectionInput, ProjectionResult};
use minijinja::Environment;
use serde::Serialize;
use std::collections::BTreeMap;

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Input label shown next to each form field, in display order
#[derive(Debug, Clone, Serialize)]
pub struct FieldLabel {
    pub name: &'static str,
    pub label: String,
}

fn field_labels() -> Vec<FieldLabel> {
    let mut labels = vec![
        FieldLabel {
            name: "total_monthly",
            label: "Total monthly contribution (NTD)".to_string(),
        },
        FieldLabel {
            name: "years",
            label: "Years".to_string(),
        },
    ];
    for (asset, name) in Asset::ALL.iter().zip(["rate_a", "rate_b", "rate_c"]) {
        labels.push(FieldLabel {
            name,
            label: format!("{} annual return (%)", asset.ticker()),
        });
    }
    labels.push(FieldLabel {
        name: "plot_height",
        label: "Chart height (inches)".to_string(),
    });
    labels
}

/// One row of the per-asset results table
#[derive(Debug, Clone, Serialize)]
pub struct AssetView {
    pub label: &'static str,
    pub monthly_contribution: u64,
    pub annual_rate: f64,
    pub final_value: f64,
}

/// Summary figures and chart for a completed projection
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub years: u32,
    pub assets: Vec<AssetView>,
    pub monthly_total: u64,
    pub total_invested: u64,
    pub total_asset: f64,
    pub total_profit: f64,
    pub profit_rate: f64,
    pub chart_uri: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl ResultView {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let projection = &result.projection;
        let summary = &projection.summary;
        let (chart_width, chart_height) = result.chart.size();

        let assets = summary
            .assets
            .iter()
            .map(|a| AssetView {
                label: a.label,
                monthly_contribution: a.monthly_contribution,
                annual_rate: projection.input.annual_rate(a.asset),
                final_value: a.final_value,
            })
            .collect();

        Self {
            years: projection.input.years,
            assets,
            monthly_total: summary.monthly_total,
            total_invested: summary.total_invested,
            total_asset: summary.total_asset,
            total_profit: summary.total_profit,
            profit_rate: summary.profit_rate,
            chart_uri: result.chart.data_uri(),
            chart_width,
            chart_height,
        }
    }
}

/// Everything the index template needs
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub fields: Vec<FieldLabel>,
    pub values: FormFields,
    pub errors: BTreeMap<&'static str, String>,
    pub results: Option<ResultView>,
}

impl PageView {
    /// Form pre-filled with defaults, nothing computed
    pub fn landing() -> Self {
        Self {
            fields: field_labels(),
            values: FormFields::from_input(&ProjectionInput::default()),
            errors: BTreeMap::new(),
            results: None,
        }
    }

    /// Form showing the inputs that produced `result`, plus the result
    pub fn with_result(result: &ProjectionResult) -> Self {
        Self {
            fields: field_labels(),
            values: FormFields::from_input(&result.projection.input),
            errors: BTreeMap::new(),
            results: Some(ResultView::from_result(result)),
        }
    }

    /// Form keeping the submitted text, with a message per bad field
    pub fn with_errors(submitted: &FormFields, invalid: &InvalidInput) -> Self {
        let defaults = FormFields::from_input(&ProjectionInput::default());
        let keep = |raw: &Option<String>, default: &Option<String>| {
            raw.clone().or_else(|| default.clone())
        };
        let values = FormFields {
            total_monthly: keep(&submitted.total_monthly, &defaults.total_monthly),
            years: keep(&submitted.years, &defaults.years),
            rate_a: keep(&submitted.rate_a, &defaults.rate_a),
            rate_b: keep(&submitted.rate_b, &defaults.rate_b),
            rate_c: keep(&submitted.rate_c, &defaults.rate_c),
            plot_height: keep(&submitted.plot_height, &defaults.plot_height),
        };

        Self {
            fields: field_labels(),
            values,
            errors: invalid.by_field(),
            results: None,
        }
    }
}

/// Compiled page templates
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ProjectionError> {
        let mut env = Environment::new();
        env.add_filter("thousands", format_thousands);
        env.add_filter("percent", format_percent);
        env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> Result<String, ProjectionError> {
        let template = self.env.get_template(INDEX_TEMPLATE_NAME)?;
        Ok(template.render(view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::projection::compute;

    #[test]
    fn test_landing_page_shows_defaults_without_results() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render(&PageView::landing()).unwrap();

        assert!(html.contains(r#"name="total_monthly" value="14500""#));
        assert!(html.contains(r#"name="rate_c" value="10.0""#));
        assert!(html.contains("00770 annual return (%)"));
        assert!(!html.contains("Total invested"));
        assert!(!html.contains("data:image/svg+xml"));
    }

    #[test]
    fn test_result_page_shows_summary_and_chart() {
        let renderer = PageRenderer::new().unwrap();
        let result = compute(&ProjectionInput::default()).unwrap();
        let html = renderer.render(&PageView::with_result(&result)).unwrap();

        assert!(html.contains("Total invested"));
        assert!(html.contains("1,740,000"));
        assert!(html.contains("2,633,284"));
        assert!(html.contains("7,250"));
        assert!(html.contains(r#"<img src="data:image/svg+xml;base64,"#));
        assert!(html.contains(r#"width="1200" height="800""#));
    }

    #[test]
    fn test_error_page_keeps_submitted_text() {
        let renderer = PageRenderer::new().unwrap();
        let submitted = FormFields {
            years: Some("ten".to_string()),
            ..Default::default()
        };
        let invalid = InvalidInput {
            errors: vec![FieldError::new("years", "must be a whole number of at least 0")],
        };
        let html = renderer
            .render(&PageView::with_errors(&submitted, &invalid))
            .unwrap();

        assert!(html.contains(r#"name="years" value="ten" class="invalid""#));
        assert!(html.contains("must be a whole number of at least 0"));
        assert!(html.contains(r#"name="total_monthly" value="14500""#));
        assert!(!html.contains("Total invested"));
    }
}
