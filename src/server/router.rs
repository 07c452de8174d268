use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        admin::get_parked_jobs,
        player::link_player,
        tenant::register_tenant,
        war::{get_active_war, get_war_by_id, get_wars},
        war_call::{create_call, delete_call, get_calls},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tenants", post(register_tenant))
        .route("/api/tenants/{tenant_id}/wars", get(get_wars))
        .route("/api/tenants/{tenant_id}/wars/active", get(get_active_war))
        .route("/api/tenants/{tenant_id}/wars/{war_id}", get(get_war_by_id))
        .route(
            "/api/tenants/{tenant_id}/wars/{war_id}/calls",
            get(get_calls).post(create_call),
        )
        .route(
            "/api/tenants/{tenant_id}/wars/{war_id}/calls/{call_id}",
            delete(delete_call),
        )
        .route("/api/players", post(link_player))
        .route("/api/admin/ingestion/parked", get(get_parked_jobs))
}
