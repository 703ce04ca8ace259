//! Request handling shared by the HTTP server and the Lambda entry point

use super::form::FormFields;
use super::page::{PageRenderer, PageView};
use crate::error::ProjectionError;
use crate::projection::compute;
use serde_json::json;

/// Rendered response, independent of the HTTP framework serving it
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

impl PageResponse {
    fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    fn bad_request(body: String) -> Self {
        Self { status: 400, body }
    }
}

/// First visit: the form with defaults, nothing computed
pub fn landing_page(renderer: &PageRenderer) -> Result<PageResponse, ProjectionError> {
    renderer.render(&PageView::landing()).map(PageResponse::ok)
}

/// Form submission: validate, project, and render the results or the field errors
pub fn submit_form(
    renderer: &PageRenderer,
    fields: &FormFields,
) -> Result<PageResponse, ProjectionError> {
    match fields.validate() {
        Ok(input) => {
            log::debug!("Projection requested: {:?}", input);
            let result = compute(&input)?;
            renderer
                .render(&PageView::with_result(&result))
                .map(PageResponse::ok)
        }
        Err(invalid) => {
            log::warn!("{}", invalid);
            renderer
                .render(&PageView::with_errors(fields, &invalid))
                .map(PageResponse::bad_request)
        }
    }
}

/// JSON projection: the full result, or the per-field errors with status 400
pub fn projection_json(fields: &FormFields) -> Result<(u16, serde_json::Value), ProjectionError> {
    match fields.validate() {
        Ok(input) => {
            let result = compute(&input)?;
            Ok((200, serde_json::to_value(&result)?))
        }
        Err(invalid) => {
            log::warn!("{}", invalid);
            Ok((400, json!({ "errors": invalid.by_field() })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> PageRenderer {
        PageRenderer::new().expect("templates should compile")
    }

    #[test]
    fn test_landing_page_is_ok() {
        let response = landing_page(&renderer()).unwrap();
        assert_eq!(response.status, 200);
        assert!(!response.body.contains("Total invested"));
    }

    #[test]
    fn test_valid_submission_renders_results() {
        let fields = FormFields {
            years: Some("5".to_string()),
            ..Default::default()
        };
        let response = submit_form(&renderer(), &fields).unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.contains("Total assets after 5 years"));
        assert!(response.body.contains("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_invalid_submission_is_bad_request() {
        let fields = FormFields {
            rate_b: Some("six".to_string()),
            ..Default::default()
        };
        let response = submit_form(&renderer(), &fields).unwrap();

        assert_eq!(response.status, 400);
        assert!(response.body.contains("must be a number"));
        assert!(!response.body.contains("data:image/svg+xml"));
    }

    #[test]
    fn test_projection_json() {
        let fields = FormFields {
            years: Some("2".to_string()),
            rate_a: Some("0".to_string()),
            ..Default::default()
        };
        let (status, body) = projection_json(&fields).unwrap();

        assert_eq!(status, 200);
        assert_eq!(body["allocation"]["asset_a"], 7250);
        assert_eq!(body["series"]["total"].as_array().unwrap().len(), 24);
        assert_eq!(body["summary"]["total_invested"], 14_500 * 24);
        // zero rate -> linear accumulation for asset A
        assert_eq!(body["series"]["asset_a"][23], 7250.0 * 24.0);
    }

    #[test]
    fn test_projection_json_errors() {
        let fields = FormFields {
            years: Some("-1".to_string()),
            plot_height: Some("0".to_string()),
            ..Default::default()
        };
        let (status, body) = projection_json(&fields).unwrap();

        assert_eq!(status, 400);
        assert!(body["errors"]["years"].is_string());
        assert!(body["errors"]["plot_height"].is_string());
    }
}
