mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, ingestion::pool::WorkerPool, router,
    scheduler::clan_ingestion, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let coc = startup::setup_coc_client(&config)?;

    tracing::info!("Starting server");

    // Keep the scheduler handle alive for the lifetime of the process
    let _scheduler =
        clan_ingestion::start_scheduler(db.clone(), config.ingestion.clone()).await?;

    let _workers = WorkerPool::new(
        db.clone(),
        Arc::new(coc.clone()),
        config.ingestion.clone(),
    )
    .spawn();

    let app = router::router()
        .with_state(AppState::new(db, coc, config.ingestion))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
