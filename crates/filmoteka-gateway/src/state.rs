use std::sync::Arc;

use filmoteka_core::MovieRepository;

#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn MovieRepository {
        self.repository.as_ref()
    }
}
