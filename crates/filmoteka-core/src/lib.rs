//! Core types and traits for the Filmoteka movie catalogue.
//!
//! This crate provides the movie record model and the repository traits
//! shared by the storage backends and the HTTP gateway.

pub mod error;
pub mod movie;
pub mod repository;

pub use error::{Result, StorageError};
pub use movie::MovieRecord;
pub use repository::{MovieRepository, ReadRepository};
