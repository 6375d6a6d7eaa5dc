use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::ApiError;
use crate::openapi::{openapi_json, redoc_html};

/// Returns the generated OpenAPI document.
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "Docs",
    responses(
        (status = 200, description = "OpenAPI document for this API", body = String, content_type = "application/json"),
    )
)]
pub async fn openapi_handler() -> Response {
    match openapi_json() {
        Ok(spec) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], spec).into_response(),
        Err(err) => {
            ApiError::Internal(format!("failed to serialize OpenAPI document: {err}")).into_response()
        }
    }
}

/// Serves the interactive API reference rendered from the OpenAPI document.
pub async fn redoc_handler() -> Html<&'static str> {
    Html(redoc_html())
}
