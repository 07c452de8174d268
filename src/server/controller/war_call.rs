use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::war_call::{CreateWarCallDto, WarCallDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::war_call::{CreateWarCallParams, WarCall},
        service::war_call::WarCallService,
        state::AppState,
    },
};

/// GET /api/tenants/{tenant_id}/wars/{war_id}/calls - Active calls ordered by map position.
///
/// # Access Control
/// - `Member(tenant_id)` - Active membership or platform admin
pub async fn get_calls(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((tenant_id, war_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Member(tenant_id)])
        .await?;

    let calls = WarCallService::new(&state.db)
        .list_calls(tenant_id, war_id)
        .await?;

    let dtos: Vec<WarCallDto> = calls.into_iter().map(WarCall::into_dto).collect();

    Ok(Json(dtos))
}

/// POST /api/tenants/{tenant_id}/wars/{war_id}/calls - Reserve a base.
///
/// # Access Control
/// - `Member(tenant_id)` - Active membership or platform admin
///
/// # Returns
/// - `201 Created` - `WarCallDto`
/// - `400 Bad Request` - Invalid map position or player tag
/// - `404 Not Found` - No such war in the tenant
/// - `409 Conflict` - The base already has an active call
pub async fn create_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((tenant_id, war_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateWarCallDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Member(tenant_id)])
        .await?;

    let call = WarCallService::new(&state.db)
        .create_call(tenant_id, war_id, CreateWarCallParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(call.into_dto())))
}

/// DELETE /api/tenants/{tenant_id}/wars/{war_id}/calls/{call_id} - Cancel a call.
///
/// Only identity is resolved here; ownership and role checks happen in the service
/// after the call is found.
///
/// # Returns
/// - `200 OK` - Cancelled `WarCallDto`
/// - `403 Forbidden` - Caller may not cancel this call
/// - `404 Not Found` - No such call in this tenant and war
pub async fn delete_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((tenant_id, war_id, call_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let call = WarCallService::new(&state.db)
        .delete_call(tenant_id, war_id, call_id, &caller)
        .await?;

    Ok(Json(call.into_dto()))
}
