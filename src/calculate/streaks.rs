//! Longest win and loss streaks within a single regular season.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::models::{LeagueSnapshot, PlayerId, StreakRecord, WeeklyMatchup};

/// A game's result from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    Loss,
    /// Equal, missing or unreadable scores
    Tie,
}

fn outcome_for(m: &WeeklyMatchup, player: PlayerId) -> Outcome {
    let Some((s1, s2)) = m.numeric_scores() else {
        return Outcome::Tie;
    };
    let (own, other) = if m.player1_id == player {
        (s1, s2)
    } else {
        (s2, s1)
    };
    if own > other {
        Outcome::Win
    } else if other > own {
        Outcome::Loss
    } else {
        Outcome::Tie
    }
}

fn label(year: i32, start: i64, end: i64, length: u32) -> String {
    if length > 1 {
        format!("{} Wk {}-{}", year, start, end)
    } else {
        format!("{} Wk {}", year, start)
    }
}

/// Streak state for one player in one season.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonStreaks {
    pub max_win_for_season: u32,
    pub max_win_details: String,
    pub max_loss_for_season: u32,
    pub max_loss_details: String,
    /// Games walked for this player-season
    pub games: u32,

    current_win: u32,
    current_loss: u32,
    start_week: i64,
}

impl SeasonStreaks {
    fn record(&mut self, year: i32, week: i64, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win => {
                self.current_win += 1;
                self.current_loss = 0;
                if self.current_win == 1 {
                    self.start_week = week;
                }
                if self.current_win > self.max_win_for_season {
                    self.max_win_for_season = self.current_win;
                    self.max_win_details = label(year, self.start_week, week, self.current_win);
                }
            }
            Outcome::Loss => {
                self.current_loss += 1;
                self.current_win = 0;
                if self.current_loss == 1 {
                    self.start_week = week;
                }
                if self.current_loss > self.max_loss_for_season {
                    self.max_loss_for_season = self.current_loss;
                    self.max_loss_details = label(year, self.start_week, week, self.current_loss);
                }
            }
            Outcome::Tie => {
                self.current_win = 0;
                self.current_loss = 0;
            }
        }
    }
}

/// Player -> season year -> streak state.
///
/// Players are kept in the order their first game was seen so the overall
/// scan breaks ties the same way every time.
#[derive(Debug, Default)]
pub struct StreakLedger {
    players: Vec<PlayerId>,
    seasons: HashMap<PlayerId, BTreeMap<i32, SeasonStreaks>>,
}

impl StreakLedger {
    fn season_mut(&mut self, player: PlayerId, year: i32) -> &mut SeasonStreaks {
        if !self.seasons.contains_key(&player) {
            self.players.push(player);
        }
        self.seasons
            .entry(player)
            .or_default()
            .entry(year)
            .or_default()
    }

    #[cfg(test)]
    pub fn get(&self, player: PlayerId, year: i32) -> Option<&SeasonStreaks> {
        self.seasons.get(&player)?.get(&year)
    }

    /// Every player-season, players in first-seen order and years ascending.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i32, &SeasonStreaks)> + '_ {
        self.players.iter().flat_map(move |player| {
            self.seasons
                .get(player)
                .into_iter()
                .flat_map(move |years| years.iter().map(move |(year, s)| (*player, *year, s)))
        })
    }
}

/// Walk every regular single-week game in (year, week) order.
pub fn season_streaks(snapshot: &LeagueSnapshot) -> StreakLedger {
    let years = snapshot.season_years();

    let mut games: Vec<(i32, &WeeklyMatchup)> = snapshot
        .matchups
        .iter()
        .filter(|m| m.game_type.is_regular() && !m.is_composite())
        .filter_map(|m| Some((*years.get(&m.season_id)?, m)))
        .collect();
    games.sort_by_key(|(year, m)| (*year, m.week_start));

    let mut ledger = StreakLedger::default();
    for (year, m) in games {
        for player in [m.player1_id, m.player2_id] {
            let outcome = outcome_for(m, player);
            ledger
                .season_mut(player, year)
                .record(year, m.week_start, outcome);
        }
    }
    ledger
}

/// The league-wide longest streaks.
#[derive(Debug, Clone, PartialEq)]
pub struct StreakSummary {
    pub longest_win: StreakRecord,
    pub longest_loss: StreakRecord,
}

/// Find the longest win and loss streaks across every player-season.
pub fn longest_streaks(snapshot: &LeagueSnapshot) -> StreakSummary {
    let ledger = season_streaks(snapshot);
    let name_of = |player: PlayerId| {
        snapshot
            .player_name(player)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Player ID {}", player))
    };

    let mut longest_win = StreakRecord::none();
    let mut longest_loss = StreakRecord::none();
    for (player, _, season) in ledger.iter() {
        if season.max_win_for_season > longest_win.streak {
            longest_win = StreakRecord {
                player_name: Some(name_of(player)),
                streak: season.max_win_for_season,
                details: season.max_win_details.clone(),
            };
        }
        if season.max_loss_for_season > longest_loss.streak {
            longest_loss = StreakRecord {
                player_name: Some(name_of(player)),
                streak: season.max_loss_for_season,
                details: season.max_loss_details.clone(),
            };
        }
    }

    debug!(
        "Longest streaks: win {} ({}), loss {} ({})",
        longest_win.streak, longest_win.details, longest_loss.streak, longest_loss.details
    );
    StreakSummary {
        longest_win,
        longest_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{id, LeagueBuilder};
    use crate::models::{GameType, RawValue};
    use pretty_assertions::assert_eq;

    fn base() -> LeagueBuilder {
        LeagueBuilder::new()
            .player(1, "Avery")
            .player(2, "Blake")
            .player(3, "Casey")
            .season(1, 2021, Some(13))
            .season(2, 2022, Some(13))
    }

    #[test]
    fn test_win_win_win_loss_win() {
        let snap = base()
            .regular(1, 1, 1, 2, 110.0, 90.0)
            .regular(1, 2, 3, 1, 80.0, 120.0)
            .regular(1, 3, 1, 2, 101.0, 100.0)
            .regular(1, 4, 1, 3, 70.0, 95.0)
            .regular(1, 5, 2, 1, 60.0, 99.0)
            .build();

        let ledger = season_streaks(&snap);
        let avery = ledger.get(id(1), 2021).unwrap();
        assert_eq!(avery.max_win_for_season, 3);
        assert_eq!(avery.max_win_details, "2021 Wk 1-3");
        assert_eq!(avery.max_loss_for_season, 1);
        assert_eq!(avery.max_loss_details, "2021 Wk 4");
        assert_eq!(avery.games, 5);
    }

    #[test]
    fn test_weeks_walked_in_order_regardless_of_row_order() {
        let snap = base()
            .regular(1, 3, 1, 2, 90.0, 100.0)
            .regular(1, 1, 1, 2, 90.0, 100.0)
            .regular(1, 2, 1, 2, 90.0, 100.0)
            .build();

        let blake = season_streaks(&snap).get(id(2), 2021).cloned().unwrap();
        assert_eq!(blake.max_win_for_season, 3);
        assert_eq!(blake.max_win_details, "2021 Wk 1-3");
    }

    #[test]
    fn test_tie_and_missing_scores_break_streaks() {
        let snap = base()
            .regular(1, 1, 1, 2, 100.0, 90.0)
            .regular(1, 2, 1, 2, 100.0, 100.0)
            .regular(1, 3, 1, 2, 100.0, 90.0)
            .matchup_with(1, 4, 1, 2, GameType::Regular, |m| {
                m.player1_score = Some(RawValue::from(100.0));
                m.player2_score = Some(RawValue::from("n/a"));
            })
            .regular(1, 5, 1, 2, 100.0, 90.0)
            .build();

        let avery = season_streaks(&snap).get(id(1), 2021).cloned().unwrap();
        assert_eq!(avery.max_win_for_season, 1);
        assert_eq!(avery.max_win_details, "2021 Wk 1");
        assert_eq!(avery.max_loss_for_season, 0);
    }

    #[test]
    fn test_streaks_do_not_cross_seasons() {
        let snap = base()
            .regular(1, 12, 1, 2, 100.0, 90.0)
            .regular(1, 13, 1, 2, 100.0, 90.0)
            .regular(2, 1, 1, 2, 100.0, 90.0)
            .build();

        let summary = longest_streaks(&snap);
        assert_eq!(summary.longest_win.streak, 2);
        assert_eq!(summary.longest_win.details, "2021 Wk 12-13");
    }

    #[test]
    fn test_only_regular_single_week_games_count() {
        let snap = base()
            .regular(1, 1, 1, 2, 100.0, 90.0)
            .game(1, 14, 1, 3, 100.0, 90.0, GameType::Playoff("semifinal".into()))
            .matchup_with(1, 2, 1, 3, GameType::Regular, |m| {
                m.weeks_included = Some("2,3".to_string());
                m.player1_score = Some(RawValue::from(200.0));
                m.player2_score = Some(RawValue::from(100.0));
            })
            .build();

        let ledger = season_streaks(&snap);
        assert_eq!(ledger.get(id(1), 2021).map(|s| s.games), Some(1));
        assert!(ledger.get(id(3), 2021).is_none());
    }

    #[test]
    fn test_first_player_encountered_wins_ties() {
        let snap = base()
            .regular(1, 1, 2, 1, 100.0, 90.0)
            .regular(1, 2, 3, 1, 100.0, 90.0)
            .build();

        let summary = longest_streaks(&snap);
        assert_eq!(summary.longest_win.player_name.as_deref(), Some("Blake"));
        assert_eq!(summary.longest_loss.player_name.as_deref(), Some("Avery"));
        assert_eq!(summary.longest_loss.streak, 2);
        assert_eq!(summary.longest_loss.details, "2021 Wk 1-2");
    }

    #[test]
    fn test_unknown_player_uses_id_label() {
        let snap = base().regular(1, 1, 9, 1, 100.0, 90.0).build();
        let summary = longest_streaks(&snap);
        assert_eq!(summary.longest_win.player_name.as_deref(), Some("Player ID 9"));
    }

    #[test]
    fn test_no_games_gives_placeholders() {
        let summary = longest_streaks(&base().build());
        assert_eq!(summary.longest_win, StreakRecord::none());
        assert_eq!(summary.longest_loss, StreakRecord::none());
    }

    #[test]
    fn test_per_season_lengths_never_exceed_games() {
        let snap = base()
            .regular(1, 1, 1, 2, 100.0, 90.0)
            .regular(1, 2, 1, 2, 80.0, 90.0)
            .regular(1, 3, 1, 2, 80.0, 90.0)
            .regular(1, 4, 1, 2, 100.0, 100.0)
            .build();

        for (_, _, s) in season_streaks(&snap).iter() {
            assert!(s.max_win_for_season + s.max_loss_for_season <= s.games);
        }
    }
}
