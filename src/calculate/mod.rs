//! Statistics calculation engine.
//!
//! Turns a [`LeagueSnapshot`](crate::models::LeagueSnapshot) into derived numbers:
//! - Career totals and personal bests
//! - Leaderboards that keep every tied leader
//! - All-time single game and single season records
//! - Head-to-head rivalry summaries
//! - Longest win and loss streaks
//!
//! Every function here is pure. Missing or malformed numbers never fail a
//! computation; they fall back to neutral values (see [`normalize`]).

pub mod career;
pub mod head_to_head;
pub mod leaderboard;
pub mod normalize;
pub mod records;
pub mod season;
pub mod streaks;

#[cfg(test)]
pub(crate) mod fixtures;

pub use career::{career_stats, personal_records, player_profile, standings};
pub use head_to_head::{head_to_head, parse_player_id};
pub use leaderboard::{select_leaders, LeaderboardRow, MetricKind};
pub use normalize::{normalize, normalize_count, Fallback};
pub use records::record_book;
pub use season::{league_overview, season_summary, season_years, week_results};
pub use streaks::{longest_streaks, StreakSummary};

use thiserror::Error;

/// Failures the presentation layer must show instead of a stats page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StatsError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StatsError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Which end of a ranking a record wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Highest,
    Lowest,
}

impl Order {
    /// Strict comparison: an equal candidate never displaces the current holder.
    pub fn beats(self, candidate: f64, current: f64) -> bool {
        match self {
            Order::Highest => candidate > current,
            Order::Lowest => candidate < current,
        }
    }

    /// Fallback for a value that is present but not numeric.
    pub fn fallback(self) -> Fallback {
        match self {
            Order::Highest => Fallback::Zero,
            Order::Lowest => Fallback::Infinity,
        }
    }
}

/// Pick the first extreme candidate in iteration order.
pub(crate) fn pick_extreme<T>(
    candidates: impl IntoIterator<Item = (f64, T)>,
    order: Order,
) -> Option<(f64, T)> {
    let mut best: Option<(f64, T)> = None;
    for (key, item) in candidates {
        let replace = match &best {
            None => true,
            Some((current, _)) => order.beats(key, *current),
        };
        if replace {
            best = Some((key, item));
        }
    }
    best
}

/// Calculate win percentage (0 to 100) from wins/losses/ties.
pub fn win_percentage(wins: i64, losses: i64, ties: i64) -> f64 {
    let total = wins as f64 + losses as f64 + ties as f64;
    if total <= 0.0 {
        0.0
    } else {
        wins as f64 / total * 100.0
    }
}

/// Divide a total across seasons, or 0.0 when there are none.
pub fn per_season(total: f64, seasons: u32) -> f64 {
    if seasons == 0 {
        0.0
    } else {
        total / seasons as f64
    }
}
