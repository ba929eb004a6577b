// SPDX-License-Identifier: MIT

//! Workout catalog routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::WorkoutDefinition;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_SEARCH_LEN: usize = 100;

/// Catalog routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/workouts", get(list_workouts))
}

#[derive(Deserialize)]
struct WorkoutsQuery {
    /// Case-insensitive substring filter on workout name
    search: Option<String>,
}

/// Catalog listing response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutsResponse {
    pub workouts: Vec<WorkoutDefinition>,
    pub total: u32,
}

/// List the workout catalog, optionally filtered by name.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<WorkoutsQuery>,
) -> Result<Json<WorkoutsResponse>> {
    if params
        .search
        .as_ref()
        .is_some_and(|s| s.len() > MAX_SEARCH_LEN)
    {
        return Err(crate::error::AppError::BadRequest(format!(
            "Search term too long (max {} characters)",
            MAX_SEARCH_LEN
        )));
    }

    tracing::debug!(
        user_id = %user.user_id,
        search = ?params.search,
        "Fetching workout catalog"
    );

    let workouts: Vec<WorkoutDefinition> = match params.search.as_deref() {
        Some(query) => state
            .catalog
            .search(query)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.workouts().to_vec(),
    };

    let total = workouts.len() as u32;
    Ok(Json(WorkoutsResponse { workouts, total }))
}
