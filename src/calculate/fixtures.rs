//! Snapshot builders shared by the engine tests.

use crate::models::{
    Championship, GameType, LeagueSnapshot, Player, RawValue, RowId, Season, SeasonResult,
    WeeklyMatchup,
};

pub(crate) fn id(n: i64) -> RowId {
    RowId::new(n)
}

/// A season result with the common numeric columns filled in.
pub(crate) fn result_line(
    season: i64,
    player: i64,
    rank: i64,
    wins: i64,
    losses: i64,
    points_for: f64,
) -> SeasonResult {
    let mut r = SeasonResult::new(id(season), id(player));
    r.rank = Some(RawValue::from(rank));
    r.wins = Some(RawValue::from(wins));
    r.losses = Some(RawValue::from(losses));
    r.ties = Some(RawValue::from(0_i64));
    r.points_for = Some(RawValue::from(points_for));
    r.regular_season_record = Some(format!("{}-{}-0", wins, losses));
    r
}

#[derive(Default)]
pub(crate) struct LeagueBuilder {
    snapshot: LeagueSnapshot,
    next_matchup: i64,
}

impl LeagueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, player_id: i64, name: &str) -> Self {
        self.snapshot.players.push(Player {
            player_id: id(player_id),
            name: name.to_string(),
        });
        self
    }

    pub fn season(mut self, season_id: i64, year: i32, end_week: Option<i64>) -> Self {
        self.snapshot.seasons.push(Season {
            season_id: id(season_id),
            year,
            regular_season_end_week: end_week,
        });
        self
    }

    pub fn result(mut self, result: SeasonResult) -> Self {
        self.snapshot.season_results.push(result);
        self
    }

    pub fn championship(mut self, season: i64, winner: i64, runner_up: i64) -> Self {
        self.snapshot.championships.push(Championship {
            season_id: id(season),
            winner_id: id(winner),
            runner_up_id: id(runner_up),
        });
        self
    }

    /// Add a played single-week game.
    #[allow(clippy::too_many_arguments)]
    pub fn game(
        self,
        season: i64,
        week: i64,
        p1: i64,
        p2: i64,
        s1: f64,
        s2: f64,
        game_type: GameType,
    ) -> Self {
        self.matchup_with(season, week, p1, p2, game_type, |m| {
            m.player1_score = Some(RawValue::from(s1));
            m.player2_score = Some(RawValue::from(s2));
        })
    }

    /// Add a regular-season game.
    pub fn regular(self, season: i64, week: i64, p1: i64, p2: i64, s1: f64, s2: f64) -> Self {
        self.game(season, week, p1, p2, s1, s2, GameType::Regular)
    }

    /// Add a matchup and adjust it before storing.
    pub fn matchup_with(
        mut self,
        season: i64,
        week: i64,
        p1: i64,
        p2: i64,
        game_type: GameType,
        adjust: impl FnOnce(&mut WeeklyMatchup),
    ) -> Self {
        self.next_matchup += 1;
        let mut m = WeeklyMatchup::new(
            id(self.next_matchup),
            id(season),
            week,
            id(p1),
            id(p2),
            game_type,
        );
        adjust(&mut m);
        self.snapshot.matchups.push(m);
        self
    }

    pub fn build(self) -> LeagueSnapshot {
        self.snapshot
    }
}
