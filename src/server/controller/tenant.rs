use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::tenant::RegisterTenantDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::tenant::tenant_into_dto,
        service::tenant::TenantService, state::AppState,
    },
};

/// POST /api/tenants - Register a clan with the caller as leader.
///
/// # Returns
/// - `201 Created` - `TenantDto`
/// - `400 Bad Request` - Malformed clan tag
/// - `409 Conflict` - Clan already registered
/// - `502 Bad Gateway` - Clan lookup failed upstream
pub async fn register_tenant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterTenantDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let tenant = TenantService::new(&state.db, &state.coc)
        .register(caller.user_id, &payload.clan_tag, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(tenant_into_dto(tenant))))
}
