use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{season_summary, season_years, week_results};
use crate::models::{MatchupLine, SeasonSummary};

use super::parse_segment;

/// Season years, most recent first.
pub async fn list_seasons(State(state): State<AppState>) -> Result<Json<Vec<i32>>, ApiError> {
    let snapshot = state.snapshot()?;
    Ok(Json(season_years(&snapshot)))
}

pub async fn season_detail(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<SeasonSummary>, ApiError> {
    let year: i32 = parse_segment(&year, "season year")?;
    let snapshot = state.snapshot()?;
    Ok(Json(season_summary(&snapshot, year)?))
}

pub async fn week_detail(
    State(state): State<AppState>,
    Path((year, week)): Path<(String, String)>,
) -> Result<Json<Vec<MatchupLine>>, ApiError> {
    let year: i32 = parse_segment(&year, "season year")?;
    let week: i64 = parse_segment(&week, "week")?;
    let snapshot = state.snapshot()?;
    Ok(Json(week_results(&snapshot, year, week)?))
}
