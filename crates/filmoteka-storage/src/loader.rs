use crate::error::LoadError;
use crate::memory::InMemoryRepository;
use filmoteka_core::MovieRecord;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Movie entry as stored in the seed file, where `genres` may be omitted.
#[derive(Deserialize)]
struct RawMovieRecord {
    title: String,
    year: i32,
    runtime: i32,
    rating: f64,
    description: String,
    director: String,
    actors: Vec<String>,
    url: String,
    #[serde(default)]
    genres: BTreeSet<String>,
}

impl From<RawMovieRecord> for MovieRecord {
    fn from(raw: RawMovieRecord) -> Self {
        MovieRecord {
            title: raw.title,
            year: raw.year,
            runtime: raw.runtime,
            rating: raw.rating,
            description: raw.description,
            director: raw.director,
            actors: raw.actors,
            url: raw.url,
            genres: raw.genres,
        }
    }
}

/// Builds a repository from the JSON array of movies stored at `path`.
///
/// Any entry that does not match the record schema fails the whole load.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<InMemoryRepository, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let repository = load_from_slice(&bytes)?;
    info!(path = %path.display(), "seeded movie repository");
    Ok(repository)
}

/// Builds a repository from a JSON array of movies held in memory.
pub fn load_from_slice(bytes: &[u8]) -> Result<InMemoryRepository, LoadError> {
    let records: Vec<RawMovieRecord> = serde_json::from_slice(bytes)?;
    let repository = InMemoryRepository::with_capacity(records.len());
    repository.load(records.into_iter().map(MovieRecord::from));
    Ok(repository)
}
