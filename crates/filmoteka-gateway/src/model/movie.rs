use filmoteka_core::MovieRecord;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeleteStatus {
    Deleted,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMovieResponse {
    pub status: DeleteStatus,
}

/// The record as it was before the update, alongside its replacement.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateMovieResponse {
    pub old: MovieRecord,
    pub new: MovieRecord,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
