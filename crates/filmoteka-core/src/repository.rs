use crate::error::Result;
use crate::movie::MovieRecord;
use async_trait::async_trait;

/// A read-only view of a movie repository.
///
/// Records are addressed by their position in the repository's current
/// ordering. A position is valid when it lies in `0..count()`; removing a
/// record shifts every later record down by one.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns the number of stored records.
    async fn count(&self) -> Result<usize>;

    /// Retrieves the record at `index`.
    /// Returns `None` if the index is out of range.
    async fn get(&self, index: usize) -> Result<Option<MovieRecord>>;

    /// Returns a snapshot of all records in their current order.
    async fn get_all(&self) -> Result<Vec<MovieRecord>>;
}

#[async_trait]
pub trait MovieRepository: ReadRepository {
    /// Appends a record and returns the index it was stored at.
    async fn add(&self, record: MovieRecord) -> Result<usize>;

    /// Replaces the record at `index` wholesale.
    /// Returns the replaced record, or `None` (leaving the repository untouched)
    /// if the index is out of range.
    async fn update(&self, index: usize, record: MovieRecord) -> Result<Option<MovieRecord>>;

    /// Removes the record at `index`.
    /// Returns the removed record, or `None` if the index is out of range.
    async fn delete(&self, index: usize) -> Result<Option<MovieRecord>>;
}
