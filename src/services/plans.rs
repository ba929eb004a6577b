// SPDX-License-Identifier: MIT

//! Plan persistence service.
//!
//! Translates a validated [`PlanSubmission`] into the persisted per-day
//! plan structure, and assembles the read-side payload of plan plus
//! freshly computed stats.

use ring::rand::{SecureRandom, SystemRandom};
use validator::Validate;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{
    PlanDay, PlanStats, PlanStatus, PlanSubmission, ScheduledWorkout, SubmissionEntry, Weekday,
    WorkoutPlan,
};
use crate::services::CatalogService;
use crate::time_utils::now_utc_rfc3339;

/// Color a new plan starts with until the user picks one.
pub const DEFAULT_PLAN_COLOR: &str = "#4F46E5";

/// Service for creating, reading, and mutating workout plans.
#[derive(Clone)]
pub struct PlanService {
    db: FirestoreDb,
    catalog: CatalogService,
}

impl PlanService {
    pub fn new(db: FirestoreDb, catalog: CatalogService) -> Self {
        Self { db, catalog }
    }

    /// Compute display stats for a plan against the catalog.
    ///
    /// Recomputed on every read; nothing is cached or persisted.
    pub fn stats_for(&self, plan: &WorkoutPlan) -> PlanStats {
        PlanStats::compute(plan, |id| self.catalog.get(id))
    }

    /// Create a plan from a submission.
    pub async fn create_plan(
        &self,
        user_id: &str,
        submission: PlanSubmission,
    ) -> Result<WorkoutPlan> {
        submission.validate()?;
        self.warn_on_unknown_workouts(&submission);

        let plan = WorkoutPlan {
            id: generate_plan_id()?,
            user_id: user_id.to_string(),
            plan_name: submission.plan_name,
            status: PlanStatus::Active,
            color: DEFAULT_PLAN_COLOR.to_string(),
            start_date: now_utc_rfc3339(),
            end_date: None,
            note: submission.note,
            days: build_days(&submission.entries),
        };

        self.db.set_plan(&plan).await?;
        tracing::info!(user_id, plan_id = %plan.id, "Workout plan created");
        Ok(plan)
    }

    /// List a user's plans, newest first.
    pub async fn list_plans(&self, user_id: &str) -> Result<Vec<WorkoutPlan>> {
        self.db.list_plans_for_user(user_id).await
    }

    /// Get a plan, scoped to its owner.
    ///
    /// A plan owned by someone else is indistinguishable from a missing one.
    pub async fn get_owned_plan(&self, user_id: &str, plan_id: &str) -> Result<WorkoutPlan> {
        let plan = self
            .db
            .get_plan(plan_id)
            .await?
            .filter(|p| p.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", plan_id)))?;
        Ok(plan)
    }

    /// Replace a plan's name, note, and schedule from a new submission.
    ///
    /// Status, color, and start date survive the update.
    pub async fn update_plan(
        &self,
        user_id: &str,
        plan_id: &str,
        submission: PlanSubmission,
    ) -> Result<WorkoutPlan> {
        submission.validate()?;
        self.warn_on_unknown_workouts(&submission);

        let mut plan = self.get_owned_plan(user_id, plan_id).await?;
        plan.plan_name = submission.plan_name;
        plan.note = submission.note;
        plan.days = build_days(&submission.entries);

        self.db.set_plan(&plan).await?;
        tracing::info!(user_id, plan_id, "Workout plan updated");
        Ok(plan)
    }

    /// Set a plan's lifecycle status.
    pub async fn set_status(
        &self,
        user_id: &str,
        plan_id: &str,
        status: PlanStatus,
    ) -> Result<WorkoutPlan> {
        let mut plan = self.get_owned_plan(user_id, plan_id).await?;
        plan.status = status;
        self.db.set_plan(&plan).await?;
        Ok(plan)
    }

    /// Set a plan's display color.
    pub async fn set_color(&self, user_id: &str, plan_id: &str, color: &str) -> Result<WorkoutPlan> {
        if !is_hex_color(color) {
            return Err(AppError::BadRequest(format!(
                "Invalid color '{}': expected #RRGGBB",
                color
            )));
        }

        let mut plan = self.get_owned_plan(user_id, plan_id).await?;
        plan.color = color.to_string();
        self.db.set_plan(&plan).await?;
        Ok(plan)
    }

    /// Delete a plan, scoped to its owner.
    pub async fn delete_plan(&self, user_id: &str, plan_id: &str) -> Result<()> {
        // Ownership check before the delete; missing plans already 404 here
        self.get_owned_plan(user_id, plan_id).await?;
        self.db.delete_plan(plan_id).await?;
        tracing::info!(user_id, plan_id, "Workout plan deleted");
        Ok(())
    }

    /// Unknown catalog references are tolerated (the aggregator skips them)
    /// but worth surfacing in the logs at write time.
    fn warn_on_unknown_workouts(&self, submission: &PlanSubmission) {
        for entry in &submission.entries {
            if self.catalog.get(&entry.workout_id).is_none() {
                tracing::warn!(
                    workout_id = %entry.workout_id,
                    "Submission references workout missing from the catalog"
                );
            }
        }
    }
}

/// Translate submission entries into the persisted per-day structure.
///
/// Days with no scheduled workouts are omitted; within a day, workouts keep
/// the submission's explicit order.
pub fn build_days(entries: &[SubmissionEntry]) -> Vec<PlanDay> {
    let mut days = Vec::new();
    for day in Weekday::ALL {
        let mut workouts: Vec<ScheduledWorkout> = entries
            .iter()
            .filter(|e| e.days.contains(&day))
            .map(|e| ScheduledWorkout {
                workout_id: e.workout_id.clone(),
                custom: e.custom,
                order: e.order,
            })
            .collect();

        if workouts.is_empty() {
            continue;
        }
        workouts.sort_by_key(|w| w.order);
        days.push(PlanDay { day, workouts });
    }
    days
}

/// Random 128-bit hex document id.
fn generate_plan_id() -> Result<String> {
    let mut bytes = [0u8; 16];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to generate plan id")))?;
    Ok(hex::encode(bytes))
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
