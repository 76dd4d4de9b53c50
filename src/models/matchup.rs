//! Weekly matchup model: one game between two league members.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{numeric, MatchupId, PlayerId, RawValue, SeasonId};

/// Kind of game a matchup row records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameType {
    Regular,
    ToiletBowl,
    ThirdPlace,
    /// Any other playoff stage (quarterfinal, semifinal, championship, ...)
    Playoff(String),
}

impl GameType {
    pub fn is_regular(&self) -> bool {
        matches!(self, GameType::Regular)
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameType::Regular => "regular",
            GameType::ToiletBowl => "toilet_bowl",
            GameType::ThirdPlace => "3rd_place",
            GameType::Playoff(tag) => tag,
        }
    }
}

impl From<String> for GameType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "regular" => GameType::Regular,
            "toilet_bowl" => GameType::ToiletBowl,
            "3rd_place" => GameType::ThirdPlace,
            _ => GameType::Playoff(tag),
        }
    }
}

impl From<GameType> for String {
    fn from(game_type: GameType) -> Self {
        game_type.as_str().to_string()
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A weekly matchup row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMatchup {
    pub matchup_id: MatchupId,
    pub season_id: SeasonId,
    pub week_start: i64,

    /// Set on multi-week composite games
    #[serde(default)]
    pub week_end: Option<i64>,

    /// Non-empty on multi-week composite games
    #[serde(default)]
    pub weeks_included: Option<String>,

    pub player1_id: PlayerId,
    pub player2_id: PlayerId,

    /// Null until the game is played
    #[serde(default)]
    pub player1_score: Option<RawValue>,

    #[serde(default)]
    pub player2_score: Option<RawValue>,

    pub game_type: GameType,

    #[serde(default)]
    pub notes: Option<String>,
}

impl WeeklyMatchup {
    /// Create an unplayed single-week matchup.
    pub fn new(
        matchup_id: MatchupId,
        season_id: SeasonId,
        week_start: i64,
        player1_id: PlayerId,
        player2_id: PlayerId,
        game_type: GameType,
    ) -> Self {
        Self {
            matchup_id,
            season_id,
            week_start,
            week_end: None,
            weeks_included: None,
            player1_id,
            player2_id,
            player1_score: None,
            player2_score: None,
            game_type,
            notes: None,
        }
    }

    /// Whether this row aggregates several weeks into one result.
    pub fn is_composite(&self) -> bool {
        self.week_end.is_some()
            || self
                .weeks_included
                .as_deref()
                .map_or(false, |w| !w.is_empty())
    }

    /// Both scores as numbers, or `None` when either is missing or malformed.
    pub fn numeric_scores(&self) -> Option<(f64, f64)> {
        Some((
            numeric(self.player1_score.as_ref())?,
            numeric(self.player2_score.as_ref())?,
        ))
    }

    /// Whether the given player took part.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }

    /// Winner and loser ids; `None` for unplayed, malformed or tied games.
    pub fn decided(&self) -> Option<(PlayerId, PlayerId)> {
        let (s1, s2) = self.numeric_scores()?;
        if s1 > s2 {
            Some((self.player1_id, self.player2_id))
        } else if s2 > s1 {
            Some((self.player2_id, self.player1_id))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowId;

    fn scored(player1: impl Into<RawValue>, player2: impl Into<RawValue>) -> WeeklyMatchup {
        let mut m = matchup(GameType::Regular);
        m.player1_score = Some(player1.into());
        m.player2_score = Some(player2.into());
        m
    }

    fn matchup(game_type: GameType) -> WeeklyMatchup {
        WeeklyMatchup::new(
            RowId::new(1),
            RowId::new(1),
            3,
            RowId::new(10),
            RowId::new(20),
            game_type,
        )
    }

    #[test]
    fn test_game_type_tags() {
        assert_eq!(GameType::from("regular".to_string()), GameType::Regular);
        assert_eq!(GameType::from("toilet_bowl".to_string()), GameType::ToiletBowl);
        assert_eq!(GameType::from("3rd_place".to_string()), GameType::ThirdPlace);
        assert_eq!(
            GameType::from("semifinal".to_string()),
            GameType::Playoff("semifinal".to_string())
        );
        assert_eq!(format!("{}", GameType::ThirdPlace), "3rd_place");
    }

    #[test]
    fn test_game_type_serializes_as_tag() {
        let json = serde_json::to_string(&GameType::Playoff("championship".into())).unwrap();
        assert_eq!(json, r#""championship""#);
        let parsed: GameType = serde_json::from_str(r#""regular""#).unwrap();
        assert!(parsed.is_regular());
    }

    #[test]
    fn test_composite_detection() {
        let mut m = matchup(GameType::Regular);
        assert!(!m.is_composite());

        m.weeks_included = Some(String::new());
        assert!(!m.is_composite());

        m.weeks_included = Some("15,16".to_string());
        assert!(m.is_composite());

        let mut m = matchup(GameType::Regular);
        m.week_end = Some(16);
        assert!(m.is_composite());
    }

    #[test]
    fn test_decided_outcomes() {
        let m = scored(110.0, 90.5);
        assert_eq!(m.decided(), Some((RowId::new(10), RowId::new(20))));

        let m = scored("80", 90.5);
        assert_eq!(m.decided(), Some((RowId::new(20), RowId::new(10))));

        let m = scored(100.0, 100.0);
        assert_eq!(m.decided(), None);

        let m = scored("forfeit", 100.0);
        assert_eq!(m.decided(), None);

        assert_eq!(matchup(GameType::Regular).decided(), None);
    }

    #[test]
    fn test_matchup_deserialize() {
        let json = r#"{"matchup_id":7,"season_id":2,"week_start":15,"week_end":16,
            "weeks_included":"15-16","player1_id":1,"player2_id":2,
            "player1_score":"201.3","player2_score":188,"game_type":"championship","notes":null}"#;
        let m: WeeklyMatchup = serde_json::from_str(json).unwrap();
        assert!(m.is_composite());
        assert_eq!(m.numeric_scores(), Some((201.3, 188.0)));
        assert_eq!(m.game_type, GameType::Playoff("championship".to_string()));
    }
}
