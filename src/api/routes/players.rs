use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{self, parse_player_id, player_profile};
use crate::models::{HeadToHead, Player, PlayerProfile};

/// Every player, sorted by name.
pub async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    let snapshot = state.snapshot()?;
    let mut players = snapshot.players;
    players.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(players))
}

pub async fn player_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerProfile>, ApiError> {
    let player_id = parse_player_id(&id)?;
    let snapshot = state.snapshot()?;
    Ok(Json(player_profile(&snapshot, player_id)?))
}

#[derive(Debug, Deserialize)]
pub struct HeadToHeadParams {
    pub player1_id: Option<String>,
    pub player2_id: Option<String>,
}

pub async fn head_to_head(
    State(state): State<AppState>,
    Query(params): Query<HeadToHeadParams>,
) -> Result<Json<HeadToHead>, ApiError> {
    let (Some(p1), Some(p2)) = (params.player1_id, params.player2_id) else {
        return Err(ApiError::BadRequest(
            "player1_id and player2_id are required".to_string(),
        ));
    };
    let player1 = parse_player_id(&p1)?;
    let player2 = parse_player_id(&p2)?;

    let snapshot = state.snapshot()?;
    Ok(Json(calculate::head_to_head(&snapshot, player1, player2)?))
}
