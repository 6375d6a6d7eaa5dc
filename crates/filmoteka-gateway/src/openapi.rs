//! OpenAPI document generation.

use std::sync::OnceLock;

use utoipa::OpenApi;
use utoipa_redoc::Redoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filmoteka API",
        version = "0.1",
        description = "In-memory movie catalogue. Movie ids are positions and shift after deletes."
    ),
    paths(
        crate::handlers::openapi::openapi_handler,
        crate::handlers::movie::list_movies_handler,
        crate::handlers::movie::get_movie_handler,
        crate::handlers::movie::create_movie_handler,
        crate::handlers::movie::delete_movie_handler,
        crate::handlers::movie::update_movie_handler,
    ),
    components(schemas(
        filmoteka_core::MovieRecord,
        crate::model::Problem,
        crate::model::DeleteMovieResponse,
        crate::model::UpdateMovieResponse,
    )),
    tags(
        (name = "Movies", description = "Movie catalogue operations"),
        (name = "Docs", description = "API documentation"),
    ),
)]
pub struct FilmotekaApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    FilmotekaApiDoc::openapi()
}

static OPENAPI_JSON_CACHE: OnceLock<String> = OnceLock::new();

/// Returns the OpenAPI document serialized as pretty JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    if let Some(spec) = OPENAPI_JSON_CACHE.get() {
        return Ok(spec.clone());
    }

    let spec = serde_json::to_string_pretty(&openapi())?;
    let _ = OPENAPI_JSON_CACHE.set(spec.clone());
    Ok(spec)
}

static REDOC_HTML_CACHE: OnceLock<String> = OnceLock::new();

/// Returns the Redoc page with the OpenAPI document embedded.
pub fn redoc_html() -> &'static str {
    REDOC_HTML_CACHE.get_or_init(|| Redoc::new(openapi()).to_html())
}
