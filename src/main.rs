// SPDX-License-Identifier: MIT

//! Fitplan-Tracker API Server
//!
//! Serves the workout catalog and persisted workout plans, computing
//! plan statistics on every read.

use fitplan_tracker::{
    config::Config,
    db::FirestoreDb,
    services::{CatalogService, PlanService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Fitplan-Tracker API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Load the workout catalog once; an unreachable collection degrades to
    // the seed file and finally to an empty catalog
    let catalog = CatalogService::load(&db, &config.catalog_seed_path).await;
    if catalog.is_empty() {
        tracing::warn!("Workout catalog is empty, plan stats will be zero");
    } else {
        tracing::info!(count = catalog.workouts().len(), "Workout catalog ready");
    }

    let plan_service = PlanService::new(db.clone(), catalog.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        catalog,
        plan_service,
    });

    // Build router
    let app = fitplan_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitplan_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
