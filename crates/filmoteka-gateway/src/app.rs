use axum::extract::OriginalUri;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{
    create_movie_handler, delete_movie_handler, get_movie_handler, health_handler,
    list_movies_handler, openapi_handler, redoc_handler, update_movie_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/openapi.json", get(openapi_handler))
            .route("/docs", get(redoc_handler))
            .route("/redoc", get(redoc_handler))
            .route(
                "/movies",
                get(list_movies_handler).post(create_movie_handler),
            )
            .route(
                "/movies/{id}",
                get(get_movie_handler)
                    .delete(delete_movie_handler)
                    .patch(update_movie_handler),
            )
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(not_found)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

async fn not_found(uri: OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.0.path().to_string())
}

async fn method_not_allowed(method: Method, uri: OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} {}", uri.0.path()))
}
