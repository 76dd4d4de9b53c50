//! Filesystem storage for the league archive.
//!
//! Each relation lives in its own JSONL file under the data directory:
//! - `players.jsonl`
//! - `seasons.jsonl`
//! - `season_results.jsonl`
//! - `championships.jsonl`
//! - `weekly_matchups.jsonl`

pub mod jsonl;
pub mod snapshot;

pub use jsonl::{JsonlReader, Table};
pub use snapshot::load_snapshot;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of a relation's JSONL file.
    pub fn table_path(&self, table: Table) -> PathBuf {
        self.data_dir.join(table.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
