//! Record book models: single extreme rows plus the assembled book.

use serde::{Deserialize, Serialize};

use super::{GameType, LeaderEntry, StreakRecord};

const NOT_AVAILABLE: &str = "N/A";

/// A single player's score in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: f64,
    pub player_name: String,
    pub opponent_name: String,
    pub week: Option<i64>,
    pub year: Option<i32>,
    pub game_type: Option<GameType>,
}

impl ScoreRecord {
    pub fn placeholder() -> Self {
        Self {
            score: 0.0,
            player_name: NOT_AVAILABLE.to_string(),
            opponent_name: NOT_AVAILABLE.to_string(),
            week: None,
            year: None,
            game_type: None,
        }
    }
}

/// Who played, what they scored, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    pub p1_name: String,
    pub p2_name: String,
    pub player1_score: f64,
    pub player2_score: f64,
    pub year: Option<i32>,
    pub week_start: Option<i64>,
    pub game_type: Option<GameType>,
}

impl GameContext {
    pub fn placeholder() -> Self {
        Self {
            p1_name: NOT_AVAILABLE.to_string(),
            p2_name: NOT_AVAILABLE.to_string(),
            player1_score: 0.0,
            player2_score: 0.0,
            year: None,
            week_start: None,
            game_type: None,
        }
    }
}

/// Margin of victory in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRecord {
    pub margin: f64,
    #[serde(flatten)]
    pub game: GameContext,
}

impl MarginRecord {
    pub fn placeholder() -> Self {
        Self {
            margin: 0.0,
            game: GameContext::placeholder(),
        }
    }
}

/// Both teams' points added together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedScoreRecord {
    pub combined_score: f64,
    #[serde(flatten)]
    pub game: GameContext,
}

impl CombinedScoreRecord {
    pub fn placeholder() -> Self {
        Self {
            combined_score: 0.0,
            game: GameContext::placeholder(),
        }
    }
}

/// A season-level stat (points for, points against, points per game).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStatRecord {
    pub value: f64,
    pub player_name: String,
    pub year: Option<i32>,
}

impl SeasonStatRecord {
    pub fn placeholder() -> Self {
        Self {
            value: 0.0,
            player_name: NOT_AVAILABLE.to_string(),
            year: None,
        }
    }
}

/// A season's win-loss-tie line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonWinLossRecord {
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    pub player_name: String,
    pub year: Option<i32>,
    pub regular_season_record: String,
}

impl SeasonWinLossRecord {
    pub fn placeholder() -> Self {
        Self {
            wins: 0,
            losses: 0,
            ties: 0,
            player_name: NOT_AVAILABLE.to_string(),
            year: None,
            regular_season_record: "0-0-0".to_string(),
        }
    }
}

/// Every all-time record the league tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordBook {
    // Single games
    pub high_score_reg: ScoreRecord,
    pub high_score_playoff: ScoreRecord,
    pub low_score: ScoreRecord,
    pub largest_mov: MarginRecord,
    pub smallest_mov: MarginRecord,
    pub closest_playoff_game: MarginRecord,
    pub low_combined_score: CombinedScoreRecord,
    pub largest_playoff_mov: MarginRecord,

    // Single seasons
    pub high_pf_season: SeasonStatRecord,
    pub lowest_pf_season: SeasonStatRecord,
    pub most_pa_season: SeasonStatRecord,
    pub high_ppg_season: SeasonStatRecord,
    pub lowest_ppg_season: SeasonStatRecord,
    pub best_season_rec: SeasonWinLossRecord,
    pub worst_season_rec: SeasonWinLossRecord,

    // Career leaderboards
    pub most_career_pf: Vec<LeaderEntry>,
    pub highest_career_ppg: Vec<LeaderEntry>,
    pub most_championships: Vec<LeaderEntry>,
    pub most_playoffs: Vec<LeaderEntry>,
    pub most_champ_appearances: Vec<LeaderEntry>,
    pub most_toilet_wins: Vec<LeaderEntry>,
    pub most_toilet_losses: Vec<LeaderEntry>,
    pub most_toilet_appearances: Vec<LeaderEntry>,

    // Streaks
    pub longest_win_streak: StreakRecord,
    pub longest_loss_streak: StreakRecord,
}
