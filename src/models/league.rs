//! League relations: players, seasons, season results and championships.

use serde::{Deserialize, Serialize};

use super::{numeric, PlayerId, RawValue, SeasonId};

/// A league member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
}

/// One league season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub season_id: SeasonId,

    /// Calendar year (unique per season)
    pub year: i32,

    /// Last regular-season week; later weeks are playoff weeks
    #[serde(default)]
    pub regular_season_end_week: Option<i64>,
}

impl Season {
    /// Whether a week falls after the regular season.
    pub fn is_playoff_week(&self, week: i64) -> bool {
        self.regular_season_end_week
            .map_or(false, |end| week > end)
    }
}

/// A player's final line for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonResult {
    pub season_id: SeasonId,
    pub player_id: PlayerId,

    /// Final standing (1 = best)
    #[serde(default)]
    pub rank: Option<RawValue>,

    /// Display string such as "10-3-0"
    #[serde(default)]
    pub regular_season_record: Option<String>,

    #[serde(default)]
    pub wins: Option<RawValue>,

    #[serde(default)]
    pub losses: Option<RawValue>,

    #[serde(default)]
    pub ties: Option<RawValue>,

    #[serde(default)]
    pub points_for: Option<RawValue>,

    #[serde(default)]
    pub points_against: Option<RawValue>,

    #[serde(default)]
    pub points_per_game: Option<RawValue>,

    /// 1 when the player reached the playoffs
    #[serde(default)]
    pub made_playoffs: Option<RawValue>,
}

impl SeasonResult {
    /// An empty line for a player in a season; fields are filled in by callers.
    pub fn new(season_id: SeasonId, player_id: PlayerId) -> Self {
        Self {
            season_id,
            player_id,
            rank: None,
            regular_season_record: None,
            wins: None,
            losses: None,
            ties: None,
            points_for: None,
            points_against: None,
            points_per_game: None,
            made_playoffs: None,
        }
    }

    pub fn made_playoffs(&self) -> bool {
        numeric(self.made_playoffs.as_ref()) == Some(1.0)
    }
}

/// Title game outcome for a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Championship {
    pub season_id: SeasonId,
    pub winner_id: PlayerId,
    pub runner_up_id: PlayerId,
}
