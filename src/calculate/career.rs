//! Per-player aggregation: career totals, personal bests, standings.

use tracing::debug;

use crate::models::{
    numeric, CareerStats, GameType, LeagueSnapshot, Outcome, PersonalRecords, PlayerId,
    PlayerProfile, RawValue, SeasonExtreme, SeasonLine, SeasonResult, StandingsRow,
    ToiletBowlSummary,
};

use super::normalize::{normalize, normalize_count, Fallback};
use super::{per_season, pick_extreme, win_percentage, Order, StatsError};

/// Sum a player's season lines into career totals. Null columns count as zero.
pub fn career_stats(history: &[SeasonLine]) -> CareerStats {
    let mut stats = CareerStats {
        seasons_played: history.len() as u32,
        ..CareerStats::default()
    };
    let mut total_rank = 0.0;

    for line in history {
        let r = &line.result;
        stats.total_wins += normalize_count(r.wins.as_ref());
        stats.total_losses += normalize_count(r.losses.as_ref());
        stats.total_ties += normalize_count(r.ties.as_ref());
        stats.total_pf += normalize(r.points_for.as_ref(), Fallback::Zero);
        stats.total_pa += normalize(r.points_against.as_ref(), Fallback::Zero);
        total_rank += normalize(r.rank.as_ref(), Fallback::Zero);
        if r.made_playoffs() {
            stats.playoff_appearances += 1;
        }
    }

    stats.win_percentage = win_percentage(stats.total_wins, stats.total_losses, stats.total_ties);
    stats.avg_rank = per_season(total_rank, stats.seasons_played);
    stats.avg_pf_per_season = per_season(stats.total_pf, stats.seasons_played);
    stats.avg_pa_per_season = per_season(stats.total_pa, stats.seasons_played);
    stats
}

fn season_extreme(
    history: &[SeasonLine],
    column: fn(&SeasonResult) -> Option<&RawValue>,
    order: Order,
) -> Option<SeasonExtreme> {
    let candidates = history
        .iter()
        .filter_map(|line| numeric(column(&line.result)).map(|v| (v, line.year)));
    pick_extreme(candidates, order).map(|(value, year)| SeasonExtreme { value, year })
}

/// Best and worst single seasons for one player.
///
/// Ties go to the first line in `history` order.
pub fn personal_records(history: &[SeasonLine]) -> PersonalRecords {
    PersonalRecords {
        best_rank: season_extreme(history, |r| r.rank.as_ref(), Order::Lowest),
        worst_rank: season_extreme(history, |r| r.rank.as_ref(), Order::Highest),
        highest_pf: season_extreme(history, |r| r.points_for.as_ref(), Order::Highest),
        lowest_pf: season_extreme(history, |r| r.points_for.as_ref(), Order::Lowest),
        highest_ppg: season_extreme(history, |r| r.points_per_game.as_ref(), Order::Highest),
        lowest_ppg: season_extreme(history, |r| r.points_per_game.as_ref(), Order::Lowest),
    }
}

fn years_desc(mut years: Vec<i32>) -> Vec<i32> {
    years.sort_by(|a, b| b.cmp(a));
    years
}

fn toilet_bowl_summary(snapshot: &LeagueSnapshot, player_id: PlayerId) -> ToiletBowlSummary {
    let mut summary = ToiletBowlSummary::default();

    for m in snapshot
        .matchups
        .iter()
        .filter(|m| m.game_type == GameType::ToiletBowl && m.involves(player_id))
    {
        let (Some(year), Some((winner, _))) = (snapshot.year_of(m.season_id), m.decided()) else {
            continue;
        };
        if winner == player_id {
            summary.wins += 1;
            summary.history.insert(year, Outcome::Win);
        } else {
            summary.losses += 1;
            summary.history.insert(year, Outcome::Loss);
        }
    }

    summary
}

/// Everything about one player: history, totals, bests and trophies.
pub fn player_profile(
    snapshot: &LeagueSnapshot,
    player_id: PlayerId,
) -> Result<PlayerProfile, StatsError> {
    let player = snapshot
        .player(player_id)
        .ok_or_else(|| StatsError::not_found("Player", player_id))?;

    let history = snapshot.player_history(player_id);
    debug!(
        "Building profile for {} from {} seasons",
        player.name,
        history.len()
    );

    let championship_wins = years_desc(
        snapshot
            .championships
            .iter()
            .filter(|c| c.winner_id == player_id)
            .filter_map(|c| snapshot.year_of(c.season_id))
            .collect(),
    );
    let runner_up_finishes = years_desc(
        snapshot
            .championships
            .iter()
            .filter(|c| c.runner_up_id == player_id)
            .filter_map(|c| snapshot.year_of(c.season_id))
            .collect(),
    );
    let third_place_finishes = years_desc(
        snapshot
            .matchups
            .iter()
            .filter(|m| m.game_type == GameType::ThirdPlace)
            .filter(|m| m.decided().map(|(winner, _)| winner) == Some(player_id))
            .filter_map(|m| snapshot.year_of(m.season_id))
            .collect(),
    );

    Ok(PlayerProfile {
        player_id,
        player_name: player.name.clone(),
        career_stats: career_stats(&history),
        player_records: personal_records(&history),
        history,
        championship_wins,
        runner_up_finishes,
        third_place_finishes,
        toilet_bowl: toilet_bowl_summary(snapshot, player_id),
    })
}

/// All-time standings for every player, best win percentage first.
///
/// Equal win percentages are ordered by total points for.
pub fn standings(snapshot: &LeagueSnapshot) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = snapshot
        .players
        .iter()
        .map(|p| {
            let mut row = StandingsRow {
                player_id: p.player_id,
                name: p.name.clone(),
                total_wins: 0,
                total_losses: 0,
                total_ties: 0,
                total_pf: 0.0,
                total_pa: 0.0,
                win_percentage: 0.0,
            };
            for r in snapshot
                .season_results
                .iter()
                .filter(|r| r.player_id == p.player_id)
            {
                row.total_wins += normalize_count(r.wins.as_ref());
                row.total_losses += normalize_count(r.losses.as_ref());
                row.total_ties += normalize_count(r.ties.as_ref());
                row.total_pf += normalize(r.points_for.as_ref(), Fallback::Zero);
                row.total_pa += normalize(r.points_against.as_ref(), Fallback::Zero);
            }
            row.win_percentage = win_percentage(row.total_wins, row.total_losses, row.total_ties);
            row
        })
        .collect();

    rows.sort_by(|a, b| {
        b.win_percentage
            .total_cmp(&a.win_percentage)
            .then_with(|| b.total_pf.total_cmp(&a.total_pf))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{id, result_line, LeagueBuilder};
    use crate::models::RawValue;
    use pretty_assertions::assert_eq;

    fn line(year: i32, result: SeasonResult) -> SeasonLine {
        SeasonLine { year, result }
    }

    #[test]
    fn test_career_stats_totals() {
        let mut first = result_line(1, 1, 2, 10, 3, 1500.0);
        first.points_against = Some(RawValue::from(1300.0));
        first.made_playoffs = Some(RawValue::from(1_i64));
        let mut second = result_line(2, 1, 6, 5, 8, 1200.0);
        second.points_against = Some(RawValue::from("1400"));
        second.ties = Some(RawValue::from(1_i64));
        second.made_playoffs = Some(RawValue::from(0_i64));

        let stats = career_stats(&[line(2021, second), line(2020, first)]);

        assert_eq!(stats.seasons_played, 2);
        assert_eq!(stats.total_wins, 15);
        assert_eq!(stats.total_losses, 11);
        assert_eq!(stats.total_ties, 1);
        assert_eq!(stats.total_pf, 2700.0);
        assert_eq!(stats.total_pa, 2700.0);
        assert_eq!(stats.avg_rank, 4.0);
        assert_eq!(stats.avg_pf_per_season, 1350.0);
        assert_eq!(stats.playoff_appearances, 1);
        assert!((stats.win_percentage - 15.0 / 27.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_career_stats_null_columns_count_as_zero() {
        let sparse = SeasonResult::new(id(1), id(1));
        let stats = career_stats(&[line(2020, sparse)]);

        assert_eq!(stats.seasons_played, 1);
        assert_eq!(stats.total_wins, 0);
        assert_eq!(stats.win_percentage, 0.0);
        assert_eq!(stats.avg_rank, 0.0);
    }

    #[test]
    fn test_career_stats_empty_history() {
        assert_eq!(career_stats(&[]), CareerStats::default());
    }

    #[test]
    fn test_personal_records() {
        let mut a = result_line(1, 1, 3, 8, 5, 1400.0);
        a.points_per_game = Some(RawValue::from(107.7));
        let mut b = result_line(2, 1, 1, 11, 2, 1650.5);
        b.points_per_game = Some(RawValue::from("126.9"));
        let c = result_line(3, 1, 9, 3, 10, 1100.0);

        let records = personal_records(&[line(2022, c), line(2021, b), line(2020, a)]);

        assert_eq!(records.best_rank, Some(SeasonExtreme { value: 1.0, year: 2021 }));
        assert_eq!(records.worst_rank, Some(SeasonExtreme { value: 9.0, year: 2022 }));
        assert_eq!(records.highest_pf, Some(SeasonExtreme { value: 1650.5, year: 2021 }));
        assert_eq!(records.lowest_pf, Some(SeasonExtreme { value: 1100.0, year: 2022 }));
        assert_eq!(records.highest_ppg, Some(SeasonExtreme { value: 126.9, year: 2021 }));
        assert_eq!(records.lowest_ppg, Some(SeasonExtreme { value: 107.7, year: 2020 }));
    }

    #[test]
    fn test_personal_records_without_data() {
        let records = personal_records(&[line(2020, SeasonResult::new(id(1), id(1)))]);
        assert_eq!(records, PersonalRecords::default());
    }

    fn league() -> LeagueSnapshot {
        LeagueBuilder::new()
            .player(1, "Avery")
            .player(2, "Blake")
            .player(3, "Casey")
            .season(1, 2020, Some(13))
            .season(2, 2021, Some(13))
            .result(result_line(1, 1, 1, 11, 2, 1600.0))
            .result(result_line(2, 1, 4, 7, 6, 1400.0))
            .result(result_line(1, 2, 2, 9, 4, 1550.0))
            .result(result_line(2, 2, 1, 10, 3, 1580.0))
            .championship(1, 1, 2)
            .championship(2, 2, 1)
            .game(1, 16, 3, 2, 120.0, 100.0, GameType::ThirdPlace)
            .game(1, 16, 1, 3, 90.0, 95.0, GameType::ToiletBowl)
            .game(2, 16, 3, 1, 101.0, 110.0, GameType::ToiletBowl)
            .game(2, 16, 1, 2, 99.0, 99.0, GameType::ThirdPlace)
            .build()
    }

    #[test]
    fn test_player_profile() {
        let profile = player_profile(&league(), id(1)).unwrap();

        assert_eq!(profile.player_name, "Avery");
        assert_eq!(profile.history.len(), 2);
        assert_eq!(profile.history[0].year, 2021);
        assert_eq!(profile.championship_wins, vec![2020]);
        assert_eq!(profile.runner_up_finishes, vec![2021]);
        assert!(profile.third_place_finishes.is_empty());
        assert_eq!(profile.toilet_bowl.wins, 1);
        assert_eq!(profile.toilet_bowl.losses, 1);
        assert_eq!(profile.toilet_bowl.history.get(&2020), Some(&Outcome::Loss));
        assert_eq!(profile.toilet_bowl.history.get(&2021), Some(&Outcome::Win));
        assert_eq!(profile.career_stats.total_wins, 18);
    }

    #[test]
    fn test_player_profile_third_place() {
        let profile = player_profile(&league(), id(3)).unwrap();
        assert_eq!(profile.third_place_finishes, vec![2020]);
        assert_eq!(profile.career_stats, CareerStats::default());
    }

    #[test]
    fn test_player_profile_not_found() {
        let err = player_profile(&league(), id(77)).unwrap_err();
        assert_eq!(err, StatsError::not_found("Player", 77));
    }

    #[test]
    fn test_standings_order() {
        let rows = standings(&league());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();

        // Blake 19-7 beats Avery 18-8; Casey has no seasons.
        assert_eq!(names, vec!["Blake", "Avery", "Casey"]);
        assert_eq!(rows[2].win_percentage, 0.0);
        assert_eq!(rows[0].total_pf, 3130.0);
    }

    #[test]
    fn test_standings_tie_broken_by_points_for() {
        let snap = LeagueBuilder::new()
            .player(1, "Low")
            .player(2, "High")
            .season(1, 2020, None)
            .result(result_line(1, 1, 2, 5, 5, 1000.0))
            .result(result_line(1, 2, 1, 5, 5, 1200.0))
            .build();

        let rows = standings(&snap);
        assert_eq!(rows[0].name, "High");
        assert_eq!(rows[1].name, "Low");
    }

    #[test]
    fn test_standings_with_huge_tallies() {
        let mut first = result_line(1, 1, 1, 0, 2, 1000.0);
        first.wins = Some(RawValue::from("1e300"));
        let mut second = result_line(2, 1, 1, 0, 2, 1000.0);
        second.wins = Some(RawValue::from("1e300"));
        let snap = LeagueBuilder::new()
            .player(1, "Avery")
            .season(1, 2020, None)
            .season(2, 2021, None)
            .result(first.clone())
            .result(second.clone())
            .build();

        let rows = standings(&snap);
        assert_eq!(rows[0].total_wins, 2 * i64::from(i32::MAX));
        assert!(rows[0].win_percentage > 99.0 && rows[0].win_percentage <= 100.0);

        let stats = career_stats(&[line(2021, second), line(2020, first)]);
        assert_eq!(stats.total_wins, 2 * i64::from(i32::MAX));
    }
}
