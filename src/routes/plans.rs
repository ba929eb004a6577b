// SPDX-License-Identifier: MIT

//! Workout plan routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{PlanStats, PlanStatus, PlanSubmission, WorkoutPlan};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Plan routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/plans", get(list_plans).post(create_plan))
        .route(
            "/api/plans/{id}",
            get(get_plan).put(update_plan).delete(delete_plan),
        )
        .route("/api/plans/{id}/status", patch(update_status))
        .route("/api/plans/{id}/color", patch(update_color))
}

/// A plan together with its freshly computed stats.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanResponse {
    pub plan: WorkoutPlan,
    pub stats: PlanStats,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlansResponse {
    pub plans: Vec<PlanResponse>,
    pub total: u32,
}

#[derive(Deserialize)]
struct UpdateStatusRequest {
    status: PlanStatus,
}

#[derive(Deserialize)]
struct UpdateColorRequest {
    color: String,
}

/// Response for plan deletion.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeletePlanResponse {
    pub success: bool,
    pub message: String,
}

/// List the current user's plans, newest first, with stats.
async fn list_plans(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PlansResponse>> {
    tracing::debug!(user_id = %user.user_id, "Fetching workout plans");

    let plans = state.plan_service.list_plans(&user.user_id).await?;

    let plans: Vec<PlanResponse> = plans
        .into_iter()
        .map(|plan| {
            let stats = state.plan_service.stats_for(&plan);
            PlanResponse { plan, stats }
        })
        .collect();

    let total = plans.len() as u32;
    Ok(Json(PlansResponse { plans, total }))
}

/// Get one plan with stats.
async fn get_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(plan_id): Path<String>,
) -> Result<Json<PlanResponse>> {
    let plan = state
        .plan_service
        .get_owned_plan(&user.user_id, &plan_id)
        .await?;
    let stats = state.plan_service.stats_for(&plan);
    Ok(Json(PlanResponse { plan, stats }))
}

/// Create a plan from a composer submission.
async fn create_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(submission): Json<PlanSubmission>,
) -> Result<(StatusCode, Json<PlanResponse>)> {
    let plan = state
        .plan_service
        .create_plan(&user.user_id, submission)
        .await?;
    let stats = state.plan_service.stats_for(&plan);
    Ok((StatusCode::CREATED, Json(PlanResponse { plan, stats })))
}

/// Replace a plan's name, note, and schedule.
async fn update_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(plan_id): Path<String>,
    Json(submission): Json<PlanSubmission>,
) -> Result<Json<PlanResponse>> {
    let plan = state
        .plan_service
        .update_plan(&user.user_id, &plan_id, submission)
        .await?;
    let stats = state.plan_service.stats_for(&plan);
    Ok(Json(PlanResponse { plan, stats }))
}

/// Toggle a plan between active and inactive.
async fn update_status(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(plan_id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<PlanResponse>> {
    let plan = state
        .plan_service
        .set_status(&user.user_id, &plan_id, body.status)
        .await?;
    let stats = state.plan_service.stats_for(&plan);
    Ok(Json(PlanResponse { plan, stats }))
}

/// Set a plan's display color.
async fn update_color(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(plan_id): Path<String>,
    Json(body): Json<UpdateColorRequest>,
) -> Result<Json<PlanResponse>> {
    let plan = state
        .plan_service
        .set_color(&user.user_id, &plan_id, &body.color)
        .await?;
    let stats = state.plan_service.stats_for(&plan);
    Ok(Json(PlanResponse { plan, stats }))
}

/// Delete a plan.
async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(plan_id): Path<String>,
) -> Result<Json<DeletePlanResponse>> {
    state
        .plan_service
        .delete_plan(&user.user_id, &plan_id)
        .await?;

    Ok(Json(DeletePlanResponse {
        success: true,
        message: "Workout plan deleted".to_string(),
    }))
}
