//! HTTP gateway for the Filmoteka movie catalogue.
//!
//! Exposes the repository operations as a small JSON API. Movies are
//! addressed by their current position in the catalogue, so identifiers
//! shift whenever an earlier movie is deleted.

pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
