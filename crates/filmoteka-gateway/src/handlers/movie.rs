use axum::extract::State;
use axum::Json;
use filmoteka_core::MovieRecord;
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::model::{DeleteMovieResponse, DeleteStatus, Problem, UpdateMovieResponse};
use crate::state::AppState;

/// Lists every movie in catalogue order.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses(
        (status = 200, description = "All movies", body = [MovieRecord]),
    )
)]
pub async fn list_movies_handler(State(state): State<AppState>) -> Result<Json<Vec<MovieRecord>>> {
    let movies = state.repository().get_all().await?;
    debug!(count = movies.len(), "listed movies");
    Ok(Json(movies))
}

/// Fetches the movie at position `id`; an unknown position yields `null`.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = usize, Path, description = "Current position of the movie; shifts after deletes")),
    responses(
        (status = 200, description = "The movie, or null when the position is empty", body = Option<MovieRecord>),
        (status = 422, description = "Malformed id", body = Problem),
    )
)]
pub async fn get_movie_handler(
    ApiPath(id): ApiPath<usize>,
    State(state): State<AppState>,
) -> Result<Json<Option<MovieRecord>>> {
    let movie = state.repository().get(id).await?;
    debug!(id, found = movie.is_some(), "fetched movie");
    Ok(Json(movie))
}

/// Appends a movie to the end of the catalogue.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = MovieRecord,
    responses(
        (status = 200, description = "The stored movie", body = MovieRecord),
        (status = 422, description = "Body does not match the movie schema", body = Problem),
    )
)]
pub async fn create_movie_handler(
    State(state): State<AppState>,
    ApiJson(movie): ApiJson<MovieRecord>,
) -> Result<Json<MovieRecord>> {
    let id = state.repository().add(movie.clone()).await?;
    info!(id, movie = %movie, "created movie");
    Ok(Json(movie))
}

/// Removes the movie at position `id`; later movies move down by one.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = usize, Path, description = "Current position of the movie; shifts after deletes")),
    responses(
        (status = 200, description = "Movie removed", body = DeleteMovieResponse),
        (status = 404, description = "No movie at this position", body = Problem),
        (status = 422, description = "Malformed id", body = Problem),
    )
)]
pub async fn delete_movie_handler(
    ApiPath(id): ApiPath<usize>,
    State(state): State<AppState>,
) -> Result<Json<DeleteMovieResponse>> {
    let removed = state
        .repository()
        .delete(id)
        .await?
        .ok_or(ApiError::MovieNotFound)?;
    info!(id, movie = %removed, "deleted movie");
    Ok(Json(DeleteMovieResponse {
        status: DeleteStatus::Deleted,
    }))
}

/// Replaces the movie at position `id` wholesale.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = usize, Path, description = "Current position of the movie; shifts after deletes")),
    request_body = MovieRecord,
    responses(
        (status = 200, description = "Previous and current record", body = UpdateMovieResponse),
        (status = 404, description = "No movie at this position", body = Problem),
        (status = 422, description = "Malformed id or body", body = Problem),
    )
)]
pub async fn update_movie_handler(
    ApiPath(id): ApiPath<usize>,
    State(state): State<AppState>,
    ApiJson(movie): ApiJson<MovieRecord>,
) -> Result<Json<UpdateMovieResponse>> {
    let old = state
        .repository()
        .update(id, movie.clone())
        .await?
        .ok_or(ApiError::MovieNotFound)?;
    info!(id, old = %old, new = %movie, "updated movie");
    Ok(Json(UpdateMovieResponse { old, new: movie }))
}
