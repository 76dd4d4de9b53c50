//! Page-shaped aggregates: player profile, season summary, league overview.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    CareerStats, GameType, MatchupId, PersonalRecords, Player, PlayerId, RawValue, SeasonLine,
};

/// Outcome of a decided game from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

/// Toilet bowl (consolation final) history for a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToiletBowlSummary {
    pub wins: u32,
    pub losses: u32,

    /// Year → outcome
    pub history: BTreeMap<i32, Outcome>,
}

/// Everything shown on a player's page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: PlayerId,
    pub player_name: String,

    /// Most recent season first
    pub history: Vec<SeasonLine>,

    pub career_stats: CareerStats,
    pub player_records: PersonalRecords,

    /// Years, most recent first
    pub championship_wins: Vec<i32>,
    pub runner_up_finishes: Vec<i32>,
    pub third_place_finishes: Vec<i32>,

    pub toilet_bowl: ToiletBowlSummary,
}

/// One line of a season's final table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStanding {
    pub player_id: PlayerId,
    pub name: String,
    pub rank: Option<RawValue>,
    pub regular_season_record: Option<String>,
    pub wins: Option<RawValue>,
    pub losses: Option<RawValue>,
    pub ties: Option<RawValue>,
    pub points_for: Option<RawValue>,
    pub points_against: Option<RawValue>,
    pub made_playoffs: Option<RawValue>,
}

/// Title game participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipInfo {
    pub winner_id: PlayerId,
    pub winner_name: String,
    pub runner_up_id: PlayerId,
    pub runner_up_name: String,
}

/// A week that has matchups in a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week_start: i64,
    pub is_playoff: bool,
}

/// Summary of one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub year: i32,
    pub results: Vec<SeasonStanding>,
    pub championship: Option<ChampionshipInfo>,
    pub toilet_bowl_winner_id: Option<PlayerId>,
    pub toilet_bowl_loser_id: Option<PlayerId>,
    pub weeks: Vec<WeekEntry>,
}

/// A matchup as listed for a single week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupLine {
    pub matchup_id: MatchupId,
    pub week_start: i64,
    pub week_end: Option<i64>,
    pub weeks_included: Option<String>,
    pub p1_id: PlayerId,
    pub p1_name: String,
    pub p2_id: PlayerId,
    pub p2_name: String,
    pub player1_score: Option<RawValue>,
    pub player2_score: Option<RawValue>,
    pub game_type: GameType,
    pub notes: Option<String>,
}

/// A season's champion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionEntry {
    pub winner_id: PlayerId,
    pub winner_name: String,
    pub year: i32,
}

/// A season's toilet bowl loser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToiletBowlLoser {
    pub year: i32,
    pub loser_id: PlayerId,
    pub loser_name: String,
}

/// League landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueOverview {
    /// Sorted by name
    pub players: Vec<Player>,
    pub latest_champion: Option<ChampionEntry>,

    /// Most recent first
    pub all_champions: Vec<ChampionEntry>,
    pub all_toilet_losers: Vec<ToiletBowlLoser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toilet_bowl_history_serializes_by_year() {
        let mut summary = ToiletBowlSummary {
            wins: 1,
            losses: 1,
            ..ToiletBowlSummary::default()
        };
        summary.history.insert(2021, Outcome::Win);
        summary.history.insert(2019, Outcome::Loss);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value["history"],
            json!({ "2019": "loss", "2021": "win" })
        );
    }
}
