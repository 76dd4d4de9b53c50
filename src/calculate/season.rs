//! Season pages and the league overview.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{
    numeric, ChampionEntry, ChampionshipInfo, GameType, LeagueOverview, LeagueSnapshot,
    MatchupLine, Player, SeasonStanding, SeasonSummary, ToiletBowlLoser, WeekEntry,
};

use super::StatsError;

/// Every season year, most recent first.
pub fn season_years(snapshot: &LeagueSnapshot) -> Vec<i32> {
    let mut years: Vec<i32> = snapshot.seasons.iter().map(|s| s.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Final table, title game, toilet bowl and week list for one season.
pub fn season_summary(snapshot: &LeagueSnapshot, year: i32) -> Result<SeasonSummary, StatsError> {
    let season = snapshot
        .season_by_year(year)
        .ok_or_else(|| StatsError::not_found("Season", year))?;
    let season_id = season.season_id;

    let mut results: Vec<SeasonStanding> = snapshot
        .season_results
        .iter()
        .filter(|r| r.season_id == season_id)
        .filter_map(|r| {
            Some(SeasonStanding {
                player_id: r.player_id,
                name: snapshot.player_name(r.player_id)?.to_string(),
                rank: r.rank.clone(),
                regular_season_record: r.regular_season_record.clone(),
                wins: r.wins.clone(),
                losses: r.losses.clone(),
                ties: r.ties.clone(),
                points_for: r.points_for.clone(),
                points_against: r.points_against.clone(),
                made_playoffs: r.made_playoffs.clone(),
            })
        })
        .collect();
    // Unranked rows sort last.
    results.sort_by(|a, b| match (numeric(a.rank.as_ref()), numeric(b.rank.as_ref())) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let championship = snapshot
        .championships
        .iter()
        .find(|c| c.season_id == season_id)
        .and_then(|c| {
            Some(ChampionshipInfo {
                winner_id: c.winner_id,
                winner_name: snapshot.player_name(c.winner_id)?.to_string(),
                runner_up_id: c.runner_up_id,
                runner_up_name: snapshot.player_name(c.runner_up_id)?.to_string(),
            })
        });

    let toilet_bowl = snapshot
        .matchups
        .iter()
        .find(|m| m.season_id == season_id && m.game_type == GameType::ToiletBowl)
        .and_then(|m| m.decided());

    let weeks: BTreeSet<i64> = snapshot
        .matchups
        .iter()
        .filter(|m| m.season_id == season_id)
        .map(|m| m.week_start)
        .collect();
    let weeks = weeks
        .into_iter()
        .map(|week_start| WeekEntry {
            week_start,
            is_playoff: season.is_playoff_week(week_start),
        })
        .collect();

    debug!("Season {} summary with {} results", year, results.len());

    Ok(SeasonSummary {
        year,
        results,
        championship,
        toilet_bowl_winner_id: toilet_bowl.map(|(winner, _)| winner),
        toilet_bowl_loser_id: toilet_bowl.map(|(_, loser)| loser),
        weeks,
    })
}

/// All matchups that started in one week of a season, by matchup id.
pub fn week_results(
    snapshot: &LeagueSnapshot,
    year: i32,
    week: i64,
) -> Result<Vec<MatchupLine>, StatsError> {
    let season = snapshot
        .season_by_year(year)
        .ok_or_else(|| StatsError::not_found("Season", year))?;

    let mut lines: Vec<MatchupLine> = snapshot
        .matchups
        .iter()
        .filter(|m| m.season_id == season.season_id && m.week_start == week)
        .filter_map(|m| {
            Some(MatchupLine {
                matchup_id: m.matchup_id,
                week_start: m.week_start,
                week_end: m.week_end,
                weeks_included: m.weeks_included.clone(),
                p1_id: m.player1_id,
                p1_name: snapshot.player_name(m.player1_id)?.to_string(),
                p2_id: m.player2_id,
                p2_name: snapshot.player_name(m.player2_id)?.to_string(),
                player1_score: m.player1_score.clone(),
                player2_score: m.player2_score.clone(),
                game_type: m.game_type.clone(),
                notes: m.notes.clone(),
            })
        })
        .collect();

    if lines.is_empty() {
        return Err(StatsError::not_found("Week", format!("{} of {}", week, year)));
    }
    lines.sort_by_key(|l| l.matchup_id);
    Ok(lines)
}

/// Players, champions and toilet bowl losers for the landing page.
pub fn league_overview(snapshot: &LeagueSnapshot) -> LeagueOverview {
    let mut players: Vec<Player> = snapshot.players.clone();
    players.sort_by(|a, b| a.name.cmp(&b.name));

    let mut all_champions: Vec<ChampionEntry> = snapshot
        .championships
        .iter()
        .filter_map(|c| {
            Some(ChampionEntry {
                winner_id: c.winner_id,
                winner_name: snapshot.player_name(c.winner_id)?.to_string(),
                year: snapshot.year_of(c.season_id)?,
            })
        })
        .collect();
    all_champions.sort_by_key(|c| Reverse(c.year));

    let mut all_toilet_losers: Vec<ToiletBowlLoser> = snapshot
        .matchups
        .iter()
        .filter(|m| m.game_type == GameType::ToiletBowl)
        .filter_map(|m| {
            let (_, loser) = m.decided()?;
            Some(ToiletBowlLoser {
                year: snapshot.year_of(m.season_id)?,
                loser_id: loser,
                loser_name: snapshot.player_name(loser)?.to_string(),
            })
        })
        .collect();
    all_toilet_losers.sort_by_key(|l| Reverse(l.year));

    LeagueOverview {
        players,
        latest_champion: all_champions.first().cloned(),
        all_champions,
        all_toilet_losers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{id, result_line, LeagueBuilder};
    use crate::models::{RawValue, SeasonResult};
    use pretty_assertions::assert_eq;

    fn league() -> LeagueSnapshot {
        let mut unranked = SeasonResult::new(id(2), id(3));
        unranked.points_for = Some(RawValue::from(900.0));

        LeagueBuilder::new()
            .player(1, "Casey")
            .player(2, "Avery")
            .player(3, "Blake")
            .season(1, 2020, Some(13))
            .season(2, 2021, None)
            .result(result_line(1, 1, 2, 8, 5, 1400.0))
            .result(result_line(1, 2, 1, 10, 3, 1500.0))
            .result(result_line(1, 3, 3, 4, 9, 1100.0))
            .result(unranked)
            .result(result_line(2, 1, 1, 9, 4, 1450.0))
            .championship(1, 2, 1)
            .championship(2, 1, 2)
            .regular(1, 1, 1, 2, 100.0, 90.0)
            .regular(1, 1, 3, 2, 80.0, 95.0)
            .game(1, 14, 1, 2, 120.0, 130.0, GameType::Playoff("final".into()))
            .game(1, 14, 3, 1, 99.0, 99.0, GameType::ToiletBowl)
            .game(1, 14, 3, 2, 60.0, 75.0, GameType::ToiletBowl)
            .game(2, 14, 3, 2, 88.0, 70.0, GameType::ToiletBowl)
            .build()
    }

    #[test]
    fn test_season_years_most_recent_first() {
        assert_eq!(season_years(&league()), vec![2021, 2020]);
    }

    #[test]
    fn test_season_summary() {
        let summary = season_summary(&league(), 2020).unwrap();

        let names: Vec<_> = summary.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Avery", "Casey", "Blake"]);
        assert_eq!(summary.championship, Some(ChampionshipInfo {
            winner_id: id(2),
            winner_name: "Avery".to_string(),
            runner_up_id: id(1),
            runner_up_name: "Casey".to_string(),
        }));
        // Only the first toilet bowl row counts, and it was tied.
        assert_eq!(summary.toilet_bowl_winner_id, None);
        assert_eq!(summary.toilet_bowl_loser_id, None);
        assert_eq!(summary.weeks, vec![
            WeekEntry { week_start: 1, is_playoff: false },
            WeekEntry { week_start: 14, is_playoff: true },
        ]);
    }

    #[test]
    fn test_unranked_results_sort_last() {
        let summary = season_summary(&league(), 2021).unwrap();
        let names: Vec<_> = summary.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Casey", "Blake"]);
        assert_eq!(summary.toilet_bowl_winner_id, Some(id(3)));
        assert_eq!(summary.toilet_bowl_loser_id, Some(id(2)));
    }

    #[test]
    fn test_null_end_week_is_never_playoff() {
        let summary = season_summary(&league(), 2021).unwrap();
        assert_eq!(summary.weeks, vec![WeekEntry { week_start: 14, is_playoff: false }]);
    }

    #[test]
    fn test_unknown_season_is_not_found() {
        assert_eq!(
            season_summary(&league(), 1999).unwrap_err(),
            StatsError::not_found("Season", 1999)
        );
    }

    #[test]
    fn test_week_results() {
        let lines = week_results(&league(), 2020, 1).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].p1_name, "Casey");
        assert_eq!(lines[1].p1_name, "Blake");
        assert!(lines[0].matchup_id < lines[1].matchup_id);
    }

    #[test]
    fn test_empty_week_is_not_found() {
        let err = week_results(&league(), 2020, 7).unwrap_err();
        assert!(matches!(err, StatsError::NotFound { entity: "Week", .. }));
        assert!(matches!(
            week_results(&league(), 1999, 1),
            Err(StatsError::NotFound { entity: "Season", .. })
        ));
    }

    #[test]
    fn test_league_overview() {
        let overview = league_overview(&league());

        let names: Vec<_> = overview.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Avery", "Blake", "Casey"]);

        assert_eq!(overview.latest_champion, Some(ChampionEntry {
            winner_id: id(1),
            winner_name: "Casey".to_string(),
            year: 2021,
        }));
        assert_eq!(overview.all_champions.len(), 2);

        let losers: Vec<_> = overview
            .all_toilet_losers
            .iter()
            .map(|l| (l.year, l.loser_name.as_str()))
            .collect();
        assert_eq!(losers, vec![(2021, "Avery"), (2020, "Blake")]);
    }

    #[test]
    fn test_empty_overview() {
        let overview = league_overview(&LeagueSnapshot::default());
        assert!(overview.players.is_empty());
        assert_eq!(overview.latest_champion, None);
        assert!(overview.all_toilet_losers.is_empty());
    }
}
