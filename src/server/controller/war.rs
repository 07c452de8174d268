use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::war::WarService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct WarPageQuery {
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub cursor: Option<i32>,
}

/// GET /api/tenants/{tenant_id}/wars - Page through the tenant's wars, newest first.
///
/// # Access Control
/// - `Member(tenant_id)` - Active membership or platform admin
///
/// # Returns
/// - `200 OK` - `PaginatedWarsDto`
/// - `400 Bad Request` - Unknown cursor
/// - `401 Unauthorized` - Caller not identified
/// - `403 Forbidden` - Caller not a member of the tenant
pub async fn get_wars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(tenant_id): Path<i32>,
    Query(query): Query<WarPageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Member(tenant_id)])
        .await?;

    let page = WarService::new(&state.db)
        .list_wars(tenant_id, query.limit, query.cursor)
        .await?;

    Ok(Json(page.into_dto()))
}

/// GET /api/tenants/{tenant_id}/wars/active - Current war with roster and attacks.
///
/// # Returns
/// - `200 OK` - `WarDetailDto`
/// - `404 Not Found` - Tenant is not in a war
pub async fn get_active_war(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(tenant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Member(tenant_id)])
        .await?;

    let war = WarService::new(&state.db)
        .get_active_war(tenant_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No active war".to_string()))?;

    Ok(Json(war.into_dto()))
}

/// GET /api/tenants/{tenant_id}/wars/{war_id} - One war with roster and attacks.
///
/// # Returns
/// - `200 OK` - `WarDetailDto`
/// - `404 Not Found` - No such war in the tenant
pub async fn get_war_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((tenant_id, war_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Member(tenant_id)])
        .await?;

    let war = WarService::new(&state.db)
        .get_war_by_id(tenant_id, war_id)
        .await?
        .ok_or_else(|| AppError::NotFound("War not found".to_string()))?;

    Ok(Json(war.into_dto()))
}
