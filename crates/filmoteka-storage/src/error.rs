use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while seeding a repository from a JSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed movie data: {0}")]
    Parse(#[from] serde_json::Error),
}
