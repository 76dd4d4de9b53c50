//! Read-only, in-memory view of the whole league dataset.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{
    Championship, Player, PlayerId, Season, SeasonId, SeasonResult, WeeklyMatchup,
};

/// All five relations, loaded once per request.
#[derive(Debug, Clone, Default)]
pub struct LeagueSnapshot {
    pub players: Vec<Player>,
    pub seasons: Vec<Season>,
    pub season_results: Vec<SeasonResult>,
    pub championships: Vec<Championship>,
    pub matchups: Vec<WeeklyMatchup>,
}

/// A season result joined with its season year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonLine {
    pub year: i32,
    #[serde(flatten)]
    pub result: SeasonResult,
}

/// A row that points at a player or season missing from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub relation: &'static str,
    pub column: &'static str,
    pub id: i64,
}

impl LeagueSnapshot {
    pub fn new(
        players: Vec<Player>,
        seasons: Vec<Season>,
        season_results: Vec<SeasonResult>,
        championships: Vec<Championship>,
        matchups: Vec<WeeklyMatchup>,
    ) -> Self {
        Self {
            players,
            seasons,
            season_results,
            championships,
            matchups,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.player_id == id)
    }

    pub fn player_name(&self, id: PlayerId) -> Option<&str> {
        self.player(id).map(|p| p.name.as_str())
    }

    /// Player id → name lookup.
    pub fn player_names(&self) -> HashMap<PlayerId, String> {
        self.players
            .iter()
            .map(|p| (p.player_id, p.name.clone()))
            .collect()
    }

    pub fn season(&self, id: SeasonId) -> Option<&Season> {
        self.seasons.iter().find(|s| s.season_id == id)
    }

    pub fn season_by_year(&self, year: i32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.year == year)
    }

    pub fn year_of(&self, season_id: SeasonId) -> Option<i32> {
        self.season(season_id).map(|s| s.year)
    }

    /// Season id → year lookup.
    pub fn season_years(&self) -> HashMap<SeasonId, i32> {
        self.seasons.iter().map(|s| (s.season_id, s.year)).collect()
    }

    /// A player's season results, most recent year first.
    ///
    /// Results whose season is unknown are dropped.
    pub fn player_history(&self, player_id: PlayerId) -> Vec<SeasonLine> {
        let years = self.season_years();
        let mut lines: Vec<SeasonLine> = self
            .season_results
            .iter()
            .filter(|r| r.player_id == player_id)
            .filter_map(|r| {
                years.get(&r.season_id).map(|&year| SeasonLine {
                    year,
                    result: r.clone(),
                })
            })
            .collect();
        lines.sort_by(|a, b| b.year.cmp(&a.year));
        lines
    }

    /// Every row that references a player or season that does not exist.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let players: HashSet<PlayerId> = self.players.iter().map(|p| p.player_id).collect();
        let seasons: HashSet<SeasonId> = self.seasons.iter().map(|s| s.season_id).collect();
        let mut dangling = Vec::new();

        let mut check = |ok: bool, relation: &'static str, column: &'static str, id: i64| {
            if !ok {
                dangling.push(DanglingReference {
                    relation,
                    column,
                    id,
                });
            }
        };

        for r in &self.season_results {
            check(seasons.contains(&r.season_id), "season_results", "season_id", r.season_id.get());
            check(players.contains(&r.player_id), "season_results", "player_id", r.player_id.get());
        }
        for c in &self.championships {
            check(seasons.contains(&c.season_id), "championships", "season_id", c.season_id.get());
            check(players.contains(&c.winner_id), "championships", "winner_id", c.winner_id.get());
            check(
                players.contains(&c.runner_up_id),
                "championships",
                "runner_up_id",
                c.runner_up_id.get(),
            );
        }
        for m in &self.matchups {
            check(seasons.contains(&m.season_id), "weekly_matchups", "season_id", m.season_id.get());
            check(players.contains(&m.player1_id), "weekly_matchups", "player1_id", m.player1_id.get());
            check(players.contains(&m.player2_id), "weekly_matchups", "player2_id", m.player2_id.get());
        }

        dangling
    }
}
