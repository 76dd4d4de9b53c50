//! Head-to-head rivalry models.

use serde::{Deserialize, Serialize};

use super::{GameType, MatchupId, Player, PlayerId, RawValue};

/// A tracked value and the game it came from, e.g. "(Week 2, 2020)".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub value: f64,
    pub details: String,
}

/// Win/loss/tie tally between two players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub p1_wins: u32,
    pub p2_wins: u32,
    pub ties: u32,
    pub p1_total_score: f64,
    pub p2_total_score: f64,

    /// Games with two numeric scores
    pub total_matchups: u32,
}

/// Rivalry extremes. Minimums are `None` when no game was counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RivalryStats {
    pub p1_max_score: Mark,
    pub p2_max_score: Mark,
    pub p1_min_score: Option<Mark>,
    pub p2_min_score: Option<Mark>,

    /// Largest win margin; zero with empty details if the side never won
    pub p1_max_mov: Mark,
    pub p2_max_mov: Mark,

    pub max_combined: Mark,
    pub min_combined: Option<Mark>,
}

/// A game between the two rivals, as listed on the comparison page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadGame {
    pub matchup_id: MatchupId,
    pub year: i32,
    pub week_start: i64,
    pub week_end: Option<i64>,
    pub weeks_included: Option<String>,
    pub p1_name: String,
    pub p2_name: String,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub player1_score: Option<RawValue>,
    pub player2_score: Option<RawValue>,
    pub game_type: GameType,
}

/// Full comparison between two players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub player1: Player,
    pub player2: Player,
    pub record: HeadToHeadRecord,
    pub rivalry: RivalryStats,

    /// Most recent first
    pub games: Vec<HeadToHeadGame>,
}
