//! JSONL (JSON Lines) storage.
//!
//! Each line is one row of a relation. A missing file is an empty relation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{StorageConfig, StorageError};

/// The relations of the league dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Players,
    Seasons,
    SeasonResults,
    Championships,
    WeeklyMatchups,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Players,
        Table::Seasons,
        Table::SeasonResults,
        Table::Championships,
        Table::WeeklyMatchups,
    ];

    /// Get the filename for this relation.
    pub fn filename(&self) -> &'static str {
        match self {
            Table::Players => "players.jsonl",
            Table::Seasons => "seasons.jsonl",
            Table::SeasonResults => "season_results.jsonl",
            Table::Championships => "championships.jsonl",
            Table::WeeklyMatchups => "weekly_matchups.jsonl",
        }
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_table(config: &StorageConfig, table: Table) -> Self {
        Self::new(config.table_path(table))
    }

    /// Read every row. Lines that fail to parse are logged and skipped.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            debug!("{:?} missing, treating as empty", self.path);
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut rows = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        index + 1,
                        self.path,
                        e
                    );
                }
            }
        }

        debug!("Read {} rows from {:?}", rows.len(), self.path);
        Ok(rows)
    }
}
