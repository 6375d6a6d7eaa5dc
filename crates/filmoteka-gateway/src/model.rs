mod movie;
mod problem;

pub use movie::{DeleteMovieResponse, DeleteStatus, HealthResponse, UpdateMovieResponse};
pub use problem::Problem;
