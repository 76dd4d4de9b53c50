//! Derived statistics models.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Career totals for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerStats {
    pub seasons_played: u32,
    pub total_wins: i64,
    pub total_losses: i64,
    pub total_ties: i64,

    /// Percentage (0 to 100) of games won
    pub win_percentage: f64,

    pub total_pf: f64,
    pub total_pa: f64,
    pub avg_rank: f64,
    pub avg_pf_per_season: f64,
    pub avg_pa_per_season: f64,
    pub playoff_appearances: u32,
}

/// An extreme season value paired with the year it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonExtreme {
    pub value: f64,
    pub year: i32,
}

/// A player's best and worst seasons. `None` means no season had data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecords {
    pub best_rank: Option<SeasonExtreme>,
    pub worst_rank: Option<SeasonExtreme>,
    pub highest_pf: Option<SeasonExtreme>,
    pub lowest_pf: Option<SeasonExtreme>,
    pub highest_ppg: Option<SeasonExtreme>,
    pub lowest_ppg: Option<SeasonExtreme>,
}

/// Leaderboard metric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    /// Integer tallies: titles, playoff trips, toilet bowls
    Count(i64),
    /// Sums and averages of points
    Amount(f64),
}

impl Metric {
    pub fn as_f64(&self) -> f64 {
        match self {
            Metric::Count(n) => *n as f64,
            Metric::Amount(x) => *x,
        }
    }
}

/// One player's line on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub player_id: PlayerId,
    pub player_name: Option<String>,
    pub count: Metric,
}

/// Longest run of consecutive wins or losses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakRecord {
    /// `None` when nobody has a streak
    pub player_name: Option<String>,
    pub streak: u32,

    /// Week range such as "2021 Wk 1-3"
    pub details: String,
}

impl StreakRecord {
    /// The zero-length record used when no streak exists.
    pub fn none() -> Self {
        Self {
            player_name: None,
            streak: 0,
            details: String::new(),
        }
    }
}

/// All-time standings line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub player_id: PlayerId,
    pub name: String,
    pub total_wins: i64,
    pub total_losses: i64,
    pub total_ties: i64,
    pub total_pf: f64,
    pub total_pa: f64,
    pub win_percentage: f64,
}
