//! AWS Lambda entry point serving the same routes as `serve`

use lambda_http::http::Method;
use lambda_http::{
    run, service_fn, Body, Error, Request, RequestExt, RequestPayloadExt, Response,
};
use portfolio_projection::web::{self, FormFields, PageRenderer, PageResponse};

fn html_response(page: PageResponse) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(page.status)
        .header("content-type", "text/html; charset=utf-8")
        .body(Body::from(page.body))?;
    Ok(response)
}

fn text_response(status: u16, text: &str) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "text/plain; charset=utf-8")
        .body(Body::from(text.to_string()))?;
    Ok(response)
}

fn projection_api(event: &Request) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let fields = FormFields::from_lookup(|name| params.first(name));
    let (status, body) = web::projection_json(&fields)?;

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    Ok(response)
}

fn function_handler(renderer: &PageRenderer, event: Request) -> Result<Response<Body>, Error> {
    log::debug!("{} {}", event.method(), event.uri().path());

    match (event.uri().path(), event.method()) {
        ("/", &Method::GET) => html_response(web::landing_page(renderer)?),
        ("/", &Method::POST) => {
            let fields: FormFields = event.payload()?.unwrap_or_default();
            html_response(web::submit_form(renderer, &fields)?)
        }
        ("/api/projection", &Method::GET) => projection_api(&event),
        ("/", _) | ("/api/projection", _) => text_response(405, "Method not allowed"),
        _ => text_response(404, "Not found"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let renderer = PageRenderer::new()?;
    let renderer = &renderer;

    run(service_fn(move |event: Request| async move {
        function_handler(renderer, event)
    }))
    .await
}
