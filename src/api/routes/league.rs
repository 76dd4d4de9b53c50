use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{league_overview, record_book, standings as all_time_standings};
use crate::models::{LeagueOverview, RecordBook, StandingsRow};

pub async fn overview(State(state): State<AppState>) -> Result<Json<LeagueOverview>, ApiError> {
    let snapshot = state.snapshot()?;
    Ok(Json(league_overview(&snapshot)))
}

pub async fn standings(
    State(state): State<AppState>,
) -> Result<Json<Vec<StandingsRow>>, ApiError> {
    let snapshot = state.snapshot()?;
    Ok(Json(all_time_standings(&snapshot)))
}

pub async fn records(State(state): State<AppState>) -> Result<Json<RecordBook>, ApiError> {
    let snapshot = state.snapshot()?;
    Ok(Json(record_book(&snapshot)))
}
