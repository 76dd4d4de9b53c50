//! Leaderboards: group per player, then keep everyone tied for first.

use std::collections::BTreeMap;

use crate::models::{
    numeric, GameType, LeaderEntry, LeagueSnapshot, Metric, PlayerId, RawValue, WeeklyMatchup,
};

use super::normalize::{normalize, normalize_count, Fallback};

/// How a leaderboard metric is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Integer tally
    Count,
    /// Floating point sum or average
    Amount,
}

/// One pre-aggregated row: a player and their metric.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub player_id: PlayerId,
    pub player_name: Option<String>,
    pub count: Option<RawValue>,
}

/// Return every row tied for the highest metric.
///
/// Absent or malformed metrics count as zero. The board is empty when no row
/// carries a numeric metric, and for tallies whose maximum is zero: a league
/// where nobody has a title has no title leader.
pub fn select_leaders(rows: &[LeaderboardRow], kind: MetricKind) -> Vec<LeaderEntry> {
    if !rows.iter().any(|r| numeric(r.count.as_ref()).is_some()) {
        return Vec::new();
    }

    let entries: Vec<LeaderEntry> = rows
        .iter()
        .map(|r| LeaderEntry {
            player_id: r.player_id,
            player_name: r.player_name.clone(),
            count: match kind {
                MetricKind::Count => Metric::Count(normalize_count(r.count.as_ref())),
                MetricKind::Amount => Metric::Amount(normalize(r.count.as_ref(), Fallback::Zero)),
            },
        })
        .collect();

    let max = entries
        .iter()
        .map(|e| e.count.as_f64())
        .fold(f64::NEG_INFINITY, f64::max);

    if kind == MetricKind::Count && max == 0.0 {
        return Vec::new();
    }

    entries
        .into_iter()
        .filter(|e| e.count.as_f64() == max)
        .collect()
}

fn rows_from<V>(
    snapshot: &LeagueSnapshot,
    grouped: BTreeMap<PlayerId, V>,
    metric: impl Fn(V) -> RawValue,
) -> Vec<LeaderboardRow> {
    grouped
        .into_iter()
        .filter_map(|(player_id, value)| {
            let name = snapshot.player_name(player_id)?;
            Some(LeaderboardRow {
                player_id,
                player_name: Some(name.to_string()),
                count: Some(metric(value)),
            })
        })
        .collect()
}

/// Count occurrences of each player id. Ids without a player row are dropped.
fn tally(
    snapshot: &LeagueSnapshot,
    ids: impl IntoIterator<Item = PlayerId>,
) -> Vec<LeaderboardRow> {
    let mut counts: BTreeMap<PlayerId, i64> = BTreeMap::new();
    for player_id in ids {
        *counts.entry(player_id).or_default() += 1;
    }
    rows_from(snapshot, counts, RawValue::from)
}

/// Sum of season points for, per player.
pub fn career_points_for(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    let mut sums: BTreeMap<PlayerId, f64> = BTreeMap::new();
    for r in snapshot.season_results.iter().filter(|r| r.points_for.is_some()) {
        *sums.entry(r.player_id).or_default() += normalize(r.points_for.as_ref(), Fallback::Zero);
    }
    rows_from(snapshot, sums, RawValue::from)
}

/// Average of season points per game, per player.
pub fn career_points_per_game(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    let mut totals: BTreeMap<PlayerId, (f64, u32)> = BTreeMap::new();
    for r in snapshot
        .season_results
        .iter()
        .filter(|r| r.points_per_game.is_some())
    {
        let entry = totals.entry(r.player_id).or_default();
        entry.0 += normalize(r.points_per_game.as_ref(), Fallback::Zero);
        entry.1 += 1;
    }
    rows_from(snapshot, totals, |(sum, n)| RawValue::from(sum / n as f64))
}

pub fn championships(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    tally(snapshot, snapshot.championships.iter().map(|c| c.winner_id))
}

pub fn championship_appearances(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    tally(
        snapshot,
        snapshot
            .championships
            .iter()
            .flat_map(|c| [c.winner_id, c.runner_up_id]),
    )
}

pub fn playoff_appearances(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    tally(
        snapshot,
        snapshot
            .season_results
            .iter()
            .filter(|r| r.made_playoffs())
            .map(|r| r.player_id),
    )
}

fn toilet_bowls(snapshot: &LeagueSnapshot) -> impl Iterator<Item = &WeeklyMatchup> {
    snapshot
        .matchups
        .iter()
        .filter(|m| m.game_type == GameType::ToiletBowl)
}

pub fn toilet_bowl_wins(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    tally(
        snapshot,
        toilet_bowls(snapshot).filter_map(|m| m.decided().map(|(winner, _)| winner)),
    )
}

pub fn toilet_bowl_losses(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    tally(
        snapshot,
        toilet_bowls(snapshot).filter_map(|m| m.decided().map(|(_, loser)| loser)),
    )
}

pub fn toilet_bowl_appearances(snapshot: &LeagueSnapshot) -> Vec<LeaderboardRow> {
    tally(
        snapshot,
        toilet_bowls(snapshot).flat_map(|m| [m.player1_id, m.player2_id]),
    )
}
