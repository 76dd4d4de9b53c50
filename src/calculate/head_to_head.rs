//! Head-to-head comparison between two players.

use std::cmp::Reverse;

use tracing::debug;

use crate::models::{
    HeadToHead, HeadToHeadGame, HeadToHeadRecord, LeagueSnapshot, Mark, Player, PlayerId,
    RivalryStats, RowId,
};

use super::StatsError;

/// Parse a player identifier supplied by a caller.
pub fn parse_player_id(raw: &str) -> Result<PlayerId, StatsError> {
    raw.parse::<RowId>()
        .map_err(|_| StatsError::InvalidInput("Invalid player ID selected.".to_string()))
}

/// Raise a running maximum. Starts at zero, so only positive values register.
fn raise(mark: &mut Mark, value: f64, details: &str) {
    if value > mark.value {
        mark.value = value;
        mark.details = details.to_string();
    }
}

/// Lower a running minimum, starting from nothing.
fn lower(mark: &mut Option<Mark>, value: f64, details: &str) {
    if mark.as_ref().map_or(true, |m| value < m.value) {
        *mark = Some(Mark {
            value,
            details: details.to_string(),
        });
    }
}

fn lookup_player(snapshot: &LeagueSnapshot, id: PlayerId) -> Result<Player, StatsError> {
    snapshot.player(id).cloned().ok_or_else(|| {
        StatsError::InvalidInput("One or both selected players not found.".to_string())
    })
}

/// Compare two players across every game they played against each other.
///
/// Scores are oriented so `p1_*` always belongs to `player1`, whichever side
/// of the matchup row they were on. Games without two numeric scores are
/// listed but not counted.
pub fn head_to_head(
    snapshot: &LeagueSnapshot,
    player1: PlayerId,
    player2: PlayerId,
) -> Result<HeadToHead, StatsError> {
    if player1 == player2 {
        return Err(StatsError::InvalidInput(
            "Please select two different players.".to_string(),
        ));
    }
    let p1 = lookup_player(snapshot, player1)?;
    let p2 = lookup_player(snapshot, player2)?;

    let mut games: Vec<HeadToHeadGame> = snapshot
        .matchups
        .iter()
        .filter(|m| {
            (m.player1_id == player1 && m.player2_id == player2)
                || (m.player1_id == player2 && m.player2_id == player1)
        })
        .filter_map(|m| {
            Some(HeadToHeadGame {
                matchup_id: m.matchup_id,
                year: snapshot.year_of(m.season_id)?,
                week_start: m.week_start,
                week_end: m.week_end,
                weeks_included: m.weeks_included.clone(),
                p1_name: snapshot.player_name(m.player1_id)?.to_string(),
                p2_name: snapshot.player_name(m.player2_id)?.to_string(),
                player1_id: m.player1_id,
                player2_id: m.player2_id,
                player1_score: m.player1_score.clone(),
                player2_score: m.player2_score.clone(),
                game_type: m.game_type.clone(),
            })
        })
        .collect();
    games.sort_by_key(|g| (Reverse(g.year), Reverse(g.week_start)));

    let mut record = HeadToHeadRecord::default();
    let mut rivalry = RivalryStats::default();

    for game in &games {
        let (Some(a), Some(b)) = (
            game.player1_score.as_ref().and_then(|s| s.as_f64()),
            game.player2_score.as_ref().and_then(|s| s.as_f64()),
        ) else {
            continue;
        };
        let (s1, s2) = if game.player1_id == player1 {
            (a, b)
        } else {
            (b, a)
        };
        let details = format!("(Week {}, {})", game.week_start, game.year);

        record.total_matchups += 1;
        record.p1_total_score += s1;
        record.p2_total_score += s2;

        raise(&mut rivalry.p1_max_score, s1, &details);
        raise(&mut rivalry.p2_max_score, s2, &details);
        lower(&mut rivalry.p1_min_score, s1, &details);
        lower(&mut rivalry.p2_min_score, s2, &details);

        let combined = s1 + s2;
        raise(&mut rivalry.max_combined, combined, &details);
        lower(&mut rivalry.min_combined, combined, &details);

        let margin = (s1 - s2).abs();
        if s1 > s2 {
            record.p1_wins += 1;
            raise(&mut rivalry.p1_max_mov, margin, &details);
        } else if s2 > s1 {
            record.p2_wins += 1;
            raise(&mut rivalry.p2_max_mov, margin, &details);
        } else {
            record.ties += 1;
        }
    }

    debug!(
        "Head-to-head {} vs {}: {}-{}-{} over {} games",
        p1.name, p2.name, record.p1_wins, record.p2_wins, record.ties, record.total_matchups
    );

    Ok(HeadToHead {
        player1: p1,
        player2: p2,
        record,
        rivalry,
        games,
    })
}
