use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::player::LinkPlayerDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::player::player_into_dto,
        service::player::PlayerService, state::AppState,
    },
};

/// POST /api/players - Link a verified in-game account to the caller.
///
/// # Returns
/// - `201 Created` - `PlayerDto`
/// - `400 Bad Request` - Malformed tag or failed verification
/// - `409 Conflict` - Player already linked
pub async fn link_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LinkPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let player = PlayerService::new(&state.db, &state.coc)
        .link_player(caller.user_id, &payload.player_tag, &payload.api_token)
        .await?;

    Ok((StatusCode::CREATED, Json(player_into_dto(player))))
}
