use std::sync::Arc;

use crate::api::ApiError;
use crate::models::LeagueSnapshot;
use crate::storage::{load_snapshot, StorageConfig};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
    pub cors_origin: Arc<str>,
}

impl AppState {
    pub fn new(storage: StorageConfig) -> Self {
        Self {
            storage: Arc::new(storage),
            cors_origin: Arc::from("*"),
        }
    }

    pub fn with_cors_origin(mut self, origin: &str) -> Self {
        self.cors_origin = Arc::from(origin);
        self
    }

    /// Read the current dataset.
    pub fn snapshot(&self) -> Result<LeagueSnapshot, ApiError> {
        Ok(load_snapshot(&self.storage)?)
    }
}
