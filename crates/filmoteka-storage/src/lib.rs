//! Storage backends for the Filmoteka movie catalogue.
//!
//! The only backend is [`InMemoryRepository`], seeded at startup from a
//! JSON file through [`load_from_path`]. Writes are never persisted.

pub mod error;
pub mod loader;
pub mod memory;

pub use error::LoadError;
pub use filmoteka_core::{MovieRecord, MovieRepository, ReadRepository, StorageError};
pub use loader::{load_from_path, load_from_slice};
pub use memory::InMemoryRepository;
