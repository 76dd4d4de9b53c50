//! Load the whole dataset into a [`LeagueSnapshot`].

use tracing::{info, warn};

use crate::models::LeagueSnapshot;

use super::{JsonlReader, StorageConfig, StorageError, Table};

/// Read all five relations from the data directory.
///
/// Missing files are empty relations. Rows pointing at unknown players or
/// seasons are kept and reported; the engine skips them where a join fails.
pub fn load_snapshot(config: &StorageConfig) -> Result<LeagueSnapshot, StorageError> {
    if !config.data_dir.is_dir() {
        return Err(StorageError::PathNotFound(config.data_dir.clone()));
    }

    let snapshot = LeagueSnapshot::new(
        JsonlReader::for_table(config, Table::Players).read_all()?,
        JsonlReader::for_table(config, Table::Seasons).read_all()?,
        JsonlReader::for_table(config, Table::SeasonResults).read_all()?,
        JsonlReader::for_table(config, Table::Championships).read_all()?,
        JsonlReader::for_table(config, Table::WeeklyMatchups).read_all()?,
    );

    info!(
        "Loaded league from {:?}: {} players, {} seasons, {} season results, {} championships, {} matchups",
        config.data_dir,
        snapshot.players.len(),
        snapshot.seasons.len(),
        snapshot.season_results.len(),
        snapshot.championships.len(),
        snapshot.matchups.len()
    );

    for dangling in snapshot.dangling_references() {
        warn!(
            "{}.{} references missing id {}",
            dangling.relation, dangling.column, dangling.id
        );
    }

    Ok(snapshot)
}

/// Write a snapshot out as a data directory.
#[cfg(test)]
pub(crate) fn seed(config: &StorageConfig, snapshot: &LeagueSnapshot) -> Result<(), StorageError> {
    fn write_table<T: serde::Serialize>(
        config: &StorageConfig,
        table: Table,
        rows: &[T],
    ) -> Result<(), StorageError> {
        let mut body = String::new();
        for row in rows {
            body.push_str(&serde_json::to_string(row)?);
            body.push('\n');
        }
        std::fs::write(config.table_path(table), body)?;
        Ok(())
    }

    std::fs::create_dir_all(&config.data_dir)?;
    write_table(config, Table::Players, &snapshot.players)?;
    write_table(config, Table::Seasons, &snapshot.seasons)?;
    write_table(config, Table::SeasonResults, &snapshot.season_results)?;
    write_table(config, Table::Championships, &snapshot.championships)?;
    write_table(config, Table::WeeklyMatchups, &snapshot.matchups)?;
    Ok(())
}
