//! All-time extremal records: single games and single seasons.
//!
//! Each category scans the rows that pass its filter and keeps the first
//! extreme it sees. A category with no qualifying row resolves to a
//! placeholder record so every slot of the record book can be rendered.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    CombinedScoreRecord, GameContext, LeagueSnapshot, MarginRecord, PlayerId, RawValue,
    RecordBook, ScoreRecord, SeasonId, SeasonResult, SeasonStatRecord, SeasonWinLossRecord,
    WeeklyMatchup,
};

use super::leaderboard::{self, select_leaders, MetricKind};
use super::normalize::{normalize, normalize_count};
use super::streaks::longest_streaks;
use super::{pick_extreme, Order};

/// Single-score categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCategory {
    /// Highest score in a regular-season game
    HighScoreRegular,
    /// Highest score in any non-regular game
    HighScorePlayoff,
    /// Lowest score in any game
    LowScore,
}

impl ScoreCategory {
    fn qualifies(self, m: &WeeklyMatchup) -> bool {
        single_game(m)
            && match self {
                ScoreCategory::HighScoreRegular => m.game_type.is_regular(),
                ScoreCategory::HighScorePlayoff => !m.game_type.is_regular(),
                ScoreCategory::LowScore => true,
            }
    }

    fn order(self) -> Order {
        match self {
            ScoreCategory::LowScore => Order::Lowest,
            _ => Order::Highest,
        }
    }
}

/// Margin-of-victory categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginCategory {
    LargestMargin,
    /// Closest decided game
    SmallestMargin,
    ClosestPlayoffGame,
    LargestPlayoffMargin,
}

impl MarginCategory {
    fn qualifies(self, m: &WeeklyMatchup) -> bool {
        let playoff_only = matches!(
            self,
            MarginCategory::ClosestPlayoffGame | MarginCategory::LargestPlayoffMargin
        );
        single_game(m) && (!playoff_only || !m.game_type.is_regular())
    }

    fn requires_decision(self) -> bool {
        matches!(
            self,
            MarginCategory::SmallestMargin | MarginCategory::ClosestPlayoffGame
        )
    }

    fn order(self) -> Order {
        match self {
            MarginCategory::LargestMargin | MarginCategory::LargestPlayoffMargin => Order::Highest,
            MarginCategory::SmallestMargin | MarginCategory::ClosestPlayoffGame => Order::Lowest,
        }
    }
}

/// Season-level stat categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonStat {
    HighestPointsFor,
    LowestPointsFor,
    MostPointsAgainst,
    HighestPointsPerGame,
    LowestPointsPerGame,
}

impl SeasonStat {
    fn column(self, r: &SeasonResult) -> Option<&RawValue> {
        match self {
            SeasonStat::HighestPointsFor | SeasonStat::LowestPointsFor => r.points_for.as_ref(),
            SeasonStat::MostPointsAgainst => r.points_against.as_ref(),
            SeasonStat::HighestPointsPerGame | SeasonStat::LowestPointsPerGame => {
                r.points_per_game.as_ref()
            }
        }
    }

    fn order(self) -> Order {
        match self {
            SeasonStat::LowestPointsFor | SeasonStat::LowestPointsPerGame => Order::Lowest,
            _ => Order::Highest,
        }
    }
}

/// Composite rows aggregate several weeks and never count as one game.
fn single_game(m: &WeeklyMatchup) -> bool {
    !m.is_composite()
}

/// Names and years needed to describe a row. Rows referencing unknown
/// players or seasons are left out of every record.
struct Lookup {
    names: HashMap<PlayerId, String>,
    years: HashMap<SeasonId, i32>,
}

impl Lookup {
    fn new(snapshot: &LeagueSnapshot) -> Self {
        Self {
            names: snapshot.player_names(),
            years: snapshot.season_years(),
        }
    }

    fn name(&self, id: PlayerId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    fn year(&self, id: SeasonId) -> Option<i32> {
        self.years.get(&id).copied()
    }

    fn game(&self, m: &WeeklyMatchup, s1: f64, s2: f64) -> Option<GameContext> {
        Some(GameContext {
            p1_name: self.name(m.player1_id)?.to_string(),
            p2_name: self.name(m.player2_id)?.to_string(),
            player1_score: s1,
            player2_score: s2,
            year: Some(self.year(m.season_id)?),
            week_start: Some(m.week_start),
            game_type: Some(m.game_type.clone()),
        })
    }
}

/// Keep a pick only when it landed on a real number.
fn finite<T>(picked: Option<(f64, T)>) -> Option<(f64, T)> {
    picked.filter(|(key, _)| key.is_finite())
}

fn score_record(snapshot: &LeagueSnapshot, lookup: &Lookup, category: ScoreCategory) -> ScoreRecord {
    let order = category.order();
    let candidates = snapshot
        .matchups
        .iter()
        .filter(|m| category.qualifies(m))
        .flat_map(|m| {
            [
                (m.player1_score.as_ref(), m.player1_id, m.player2_id),
                (m.player2_score.as_ref(), m.player2_id, m.player1_id),
            ]
            .into_iter()
            .filter_map(move |(score, player, opponent)| {
                let score = score?;
                let record = ScoreRecord {
                    score: 0.0,
                    player_name: lookup.name(player)?.to_string(),
                    opponent_name: lookup.name(opponent)?.to_string(),
                    week: Some(m.week_start),
                    year: Some(lookup.year(m.season_id)?),
                    game_type: Some(m.game_type.clone()),
                };
                Some((normalize(Some(score), order.fallback()), record))
            })
        });

    match finite(pick_extreme(candidates, order)) {
        Some((score, record)) => ScoreRecord { score, ..record },
        None => ScoreRecord::placeholder(),
    }
}

fn margin_record(
    snapshot: &LeagueSnapshot,
    lookup: &Lookup,
    category: MarginCategory,
) -> MarginRecord {
    let candidates = snapshot
        .matchups
        .iter()
        .filter(|m| category.qualifies(m))
        .filter_map(|m| {
            let (s1, s2) = m.numeric_scores()?;
            let margin = (s1 - s2).abs();
            if category.requires_decision() && margin == 0.0 {
                return None;
            }
            Some((margin, lookup.game(m, s1, s2)?))
        });

    match finite(pick_extreme(candidates, category.order())) {
        Some((margin, game)) => MarginRecord { margin, game },
        None => MarginRecord::placeholder(),
    }
}

fn lowest_combined_score(snapshot: &LeagueSnapshot, lookup: &Lookup) -> CombinedScoreRecord {
    let candidates = snapshot
        .matchups
        .iter()
        .filter(|m| single_game(m))
        .filter_map(|m| {
            let (s1, s2) = m.numeric_scores()?;
            Some((s1 + s2, lookup.game(m, s1, s2)?))
        });

    match finite(pick_extreme(candidates, Order::Lowest)) {
        Some((combined_score, game)) => CombinedScoreRecord {
            combined_score,
            game,
        },
        None => CombinedScoreRecord::placeholder(),
    }
}

fn season_stat_record(
    snapshot: &LeagueSnapshot,
    lookup: &Lookup,
    stat: SeasonStat,
) -> SeasonStatRecord {
    let order = stat.order();
    let candidates = snapshot.season_results.iter().filter_map(|r| {
        let raw = stat.column(r)?;
        let record = SeasonStatRecord {
            value: 0.0,
            player_name: lookup.name(r.player_id)?.to_string(),
            year: Some(lookup.year(r.season_id)?),
        };
        Some((normalize(Some(raw), order.fallback()), record))
    });

    match finite(pick_extreme(candidates, order)) {
        Some((value, record)) => SeasonStatRecord { value, ..record },
        None => SeasonStatRecord::placeholder(),
    }
}

/// (wins, losses, ties) ranking for the best season: most wins, then fewest
/// losses, then fewest ties.
fn best_line(a: (i64, i64, i64), b: (i64, i64, i64)) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| b.1.cmp(&a.1))
        .then_with(|| b.2.cmp(&a.2))
}

/// Ranking for the worst season: most losses, then fewest wins, then most ties.
fn worst_line(a: (i64, i64, i64), b: (i64, i64, i64)) -> Ordering {
    a.1.cmp(&b.1)
        .then_with(|| b.0.cmp(&a.0))
        .then_with(|| a.2.cmp(&b.2))
}

fn win_loss_record(
    snapshot: &LeagueSnapshot,
    lookup: &Lookup,
    rank: fn((i64, i64, i64), (i64, i64, i64)) -> Ordering,
) -> SeasonWinLossRecord {
    let mut best: Option<((i64, i64, i64), SeasonWinLossRecord)> = None;

    for r in snapshot
        .season_results
        .iter()
        .filter(|r| r.wins.is_some() && r.losses.is_some())
    {
        let (Some(name), Some(year)) = (lookup.name(r.player_id), lookup.year(r.season_id)) else {
            continue;
        };
        let line = (
            normalize_count(r.wins.as_ref()),
            normalize_count(r.losses.as_ref()),
            normalize_count(r.ties.as_ref()),
        );
        if best
            .as_ref()
            .map_or(true, |(current, _)| rank(line, *current) == Ordering::Greater)
        {
            let record = SeasonWinLossRecord {
                wins: line.0,
                losses: line.1,
                ties: line.2,
                player_name: name.to_string(),
                year: Some(year),
                regular_season_record: r
                    .regular_season_record
                    .clone()
                    .unwrap_or_else(|| format!("{}-{}-{}", line.0, line.1, line.2)),
            };
            best = Some((line, record));
        }
    }

    best.map(|(_, record)| record)
        .unwrap_or_else(SeasonWinLossRecord::placeholder)
}

/// Extreme single-score record for a category.
pub fn find_score_record(snapshot: &LeagueSnapshot, category: ScoreCategory) -> ScoreRecord {
    score_record(snapshot, &Lookup::new(snapshot), category)
}

/// Extreme margin-of-victory record for a category.
pub fn find_margin_record(snapshot: &LeagueSnapshot, category: MarginCategory) -> MarginRecord {
    margin_record(snapshot, &Lookup::new(snapshot), category)
}

/// Extreme season stat record.
pub fn find_season_stat_record(snapshot: &LeagueSnapshot, stat: SeasonStat) -> SeasonStatRecord {
    season_stat_record(snapshot, &Lookup::new(snapshot), stat)
}

/// Best regular season by win-loss line.
pub fn best_season_record(snapshot: &LeagueSnapshot) -> SeasonWinLossRecord {
    win_loss_record(snapshot, &Lookup::new(snapshot), best_line)
}

/// Worst regular season by win-loss line.
pub fn worst_season_record(snapshot: &LeagueSnapshot) -> SeasonWinLossRecord {
    win_loss_record(snapshot, &Lookup::new(snapshot), worst_line)
}

/// Build the full record book.
pub fn record_book(snapshot: &LeagueSnapshot) -> RecordBook {
    let lookup = Lookup::new(snapshot);
    let streaks = longest_streaks(snapshot);

    let book = RecordBook {
        high_score_reg: score_record(snapshot, &lookup, ScoreCategory::HighScoreRegular),
        high_score_playoff: score_record(snapshot, &lookup, ScoreCategory::HighScorePlayoff),
        low_score: score_record(snapshot, &lookup, ScoreCategory::LowScore),
        largest_mov: margin_record(snapshot, &lookup, MarginCategory::LargestMargin),
        smallest_mov: margin_record(snapshot, &lookup, MarginCategory::SmallestMargin),
        closest_playoff_game: margin_record(snapshot, &lookup, MarginCategory::ClosestPlayoffGame),
        low_combined_score: lowest_combined_score(snapshot, &lookup),
        largest_playoff_mov: margin_record(snapshot, &lookup, MarginCategory::LargestPlayoffMargin),

        high_pf_season: season_stat_record(snapshot, &lookup, SeasonStat::HighestPointsFor),
        lowest_pf_season: season_stat_record(snapshot, &lookup, SeasonStat::LowestPointsFor),
        most_pa_season: season_stat_record(snapshot, &lookup, SeasonStat::MostPointsAgainst),
        high_ppg_season: season_stat_record(snapshot, &lookup, SeasonStat::HighestPointsPerGame),
        lowest_ppg_season: season_stat_record(snapshot, &lookup, SeasonStat::LowestPointsPerGame),
        best_season_rec: win_loss_record(snapshot, &lookup, best_line),
        worst_season_rec: win_loss_record(snapshot, &lookup, worst_line),

        most_career_pf: select_leaders(
            &leaderboard::career_points_for(snapshot),
            MetricKind::Amount,
        ),
        highest_career_ppg: select_leaders(
            &leaderboard::career_points_per_game(snapshot),
            MetricKind::Amount,
        ),
        most_championships: select_leaders(&leaderboard::championships(snapshot), MetricKind::Count),
        most_playoffs: select_leaders(
            &leaderboard::playoff_appearances(snapshot),
            MetricKind::Count,
        ),
        most_champ_appearances: select_leaders(
            &leaderboard::championship_appearances(snapshot),
            MetricKind::Count,
        ),
        most_toilet_wins: select_leaders(&leaderboard::toilet_bowl_wins(snapshot), MetricKind::Count),
        most_toilet_losses: select_leaders(
            &leaderboard::toilet_bowl_losses(snapshot),
            MetricKind::Count,
        ),
        most_toilet_appearances: select_leaders(
            &leaderboard::toilet_bowl_appearances(snapshot),
            MetricKind::Count,
        ),

        longest_win_streak: streaks.longest_win,
        longest_loss_streak: streaks.longest_loss,
    };

    debug!(
        "Record book built from {} matchups and {} season results",
        snapshot.matchups.len(),
        snapshot.season_results.len()
    );
    book
}
