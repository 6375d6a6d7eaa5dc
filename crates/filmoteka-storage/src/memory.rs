use async_trait::async_trait;
use filmoteka_core::{MovieRecord, MovieRepository, ReadRepository, Result};
use parking_lot::RwLock;
use tracing::{debug, trace};

/// In-memory implementation of the repository traits backed by a `Vec`.
///
/// Every read and write goes through a single `RwLock`, so concurrent
/// handlers never observe a half-applied mutation. Reads hand out clones;
/// no caller ever holds a reference into the underlying vector.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<MovieRecord>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Appends already-parsed records, preserving their order.
    pub fn load(&self, records: impl IntoIterator<Item = MovieRecord>) {
        let mut guard = self.records.write();
        let before = guard.len();
        guard.extend(records);
        debug!(loaded = guard.len() - before, total = guard.len(), "loaded movie records");
    }
}

impl From<Vec<MovieRecord>> for InMemoryRepository {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

fn in_range(index: usize, len: usize) -> bool {
    index < len
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }

    async fn get(&self, index: usize) -> Result<Option<MovieRecord>> {
        let guard = self.records.read();
        if !in_range(index, guard.len()) {
            trace!(index, len = guard.len(), "index out of range");
            return Ok(None);
        }
        Ok(Some(guard[index].clone()))
    }

    async fn get_all(&self) -> Result<Vec<MovieRecord>> {
        Ok(self.records.read().clone())
    }
}

#[async_trait]
impl MovieRepository for InMemoryRepository {
    async fn add(&self, record: MovieRecord) -> Result<usize> {
        let mut guard = self.records.write();
        guard.push(record);
        let index = guard.len() - 1;
        debug!(index, "added movie record");
        Ok(index)
    }

    async fn update(&self, index: usize, record: MovieRecord) -> Result<Option<MovieRecord>> {
        let mut guard = self.records.write();
        if !in_range(index, guard.len()) {
            trace!(index, len = guard.len(), "update skipped, index out of range");
            return Ok(None);
        }
        let old = std::mem::replace(&mut guard[index], record);
        debug!(index, "replaced movie record");
        Ok(Some(old))
    }

    async fn delete(&self, index: usize) -> Result<Option<MovieRecord>> {
        let mut guard = self.records.write();
        if !in_range(index, guard.len()) {
            trace!(index, len = guard.len(), "delete skipped, index out of range");
            return Ok(None);
        }
        let removed = guard.remove(index);
        debug!(index, remaining = guard.len(), "removed movie record");
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn movie(title: &str) -> MovieRecord {
        MovieRecord::builder()
            .title(title)
            .year(2000)
            .runtime(90)
            .rating(7.5)
            .build()
    }

    fn seeded(titles: &[&str]) -> InMemoryRepository {
        InMemoryRepository::from(titles.iter().map(|t| movie(t)).collect::<Vec<_>>())
    }

    #[tokio::test]
    async fn get_returns_record_at_position() {
        let repo = seeded(&["first", "second"]);

        assert_eq!(repo.get(0).await.unwrap().unwrap().title, "first");
        assert_eq!(repo.get(1).await.unwrap().unwrap().title, "second");
    }

    #[tokio::test]
    async fn get_out_of_range_is_none() {
        let repo = seeded(&["only"]);

        assert!(repo.get(1).await.unwrap().is_none());
        assert!(repo.get(usize::MAX).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_zero_on_empty_repository_is_none() {
        let repo = InMemoryRepository::new();

        assert!(repo.get(0).await.unwrap().is_none());
        assert!(repo.update(0, movie("x")).await.unwrap().is_none());
        assert!(repo.delete(0).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn add_appends_at_the_end() {
        let repo = seeded(&["first"]);

        let index = repo.add(movie("second")).await.unwrap();
        assert_eq!(index, 1);

        let count = repo.count().await.unwrap();
        assert_eq!(repo.get(count - 1).await.unwrap(), Some(movie("second")));
    }

    #[tokio::test]
    async fn update_replaces_wholesale() {
        let repo = seeded(&["old"]);

        let replacement = MovieRecord::builder()
            .title("new")
            .year(2024)
            .runtime(120)
            .rating(9.1)
            .director("someone")
            .build();

        let old = repo.update(0, replacement.clone()).await.unwrap();
        assert_eq!(old, Some(movie("old")));
        assert_eq!(repo.get(0).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn update_out_of_range_leaves_repository_untouched() {
        let repo = seeded(&["a", "b"]);

        assert!(repo.update(2, movie("c")).await.unwrap().is_none());
        assert_eq!(repo.get_all().await.unwrap(), vec![movie("a"), movie("b")]);
    }

    #[tokio::test]
    async fn delete_shifts_later_records_down() {
        let repo = seeded(&["a", "b", "c"]);

        let removed = repo.delete(1).await.unwrap();
        assert_eq!(removed, Some(movie("b")));
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.get(1).await.unwrap(), Some(movie("c")));
    }

    #[tokio::test]
    async fn delete_out_of_range_is_noop() {
        let repo = seeded(&["a", "b"]);

        assert!(repo.delete(5).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn get_all_is_a_snapshot() {
        let repo = seeded(&["a"]);

        let snapshot = repo.get_all().await.unwrap();
        repo.add(movie("b")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn load_preserves_order_after_existing_records() {
        let repo = seeded(&["a"]);

        repo.load(vec![movie("b"), movie("c")]);

        let titles: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn concurrent_adds_each_land_once() {
        let repo = Arc::new(seeded(&["seed"]));
        let mut handles = vec![];

        for i in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.add(movie(&format!("movie-{i:02}"))).await.unwrap()
            }));
        }

        let mut indices = vec![];
        for handle in handles {
            indices.push(handle.await.unwrap());
        }
        indices.sort_unstable();

        assert_eq!(repo.count().await.unwrap(), 51);
        assert_eq!(indices, (1..=50).collect::<Vec<_>>());
    }
}
