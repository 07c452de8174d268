use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::ingestion::IngestionJobDto,
    server::{
        error::AppError,
        ingestion::queue::JobQueue,
        middleware::auth::{AuthGuard, Permission},
        model::ingestion::job_into_dto,
        state::AppState,
    },
};

/// GET /api/admin/ingestion/parked - Jobs that exhausted their attempts.
///
/// # Access Control
/// - `PlatformAdmin`
pub async fn get_parked_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::PlatformAdmin])
        .await?;

    let jobs = JobQueue::from_config(&state.db, &state.ingestion).parked().await?;
    let dtos: Vec<IngestionJobDto> = jobs.into_iter().map(job_into_dto).collect();

    Ok(Json(dtos))
}
