// SPDX-License-Identifier: MIT

//! Derived plan statistics for the dashboard cards.
//!
//! Stats are recomputed from the plan document on every read; they are
//! never persisted and never incrementally maintained.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{WorkoutDefinition, WorkoutPlan};

/// Summary statistics computed from a [`WorkoutPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanStats {
    /// Total scheduled minutes per week
    pub total_time_min: u32,
    /// Estimated weekly calorie burn
    pub total_calories: f64,
    /// Number of distinct workouts in the plan
    pub total_unique_workouts: u32,
    /// Muscle group with the strictly highest occurrence count,
    /// ties broken by first appearance in the plan scan
    pub most_targeted_muscle_group: Option<String>,
    /// Distinct workout ids, for the "view workouts" listing
    pub unique_workout_ids: BTreeSet<String>,
}

impl Default for PlanStats {
    fn default() -> Self {
        Self {
            total_time_min: 0,
            total_calories: 0.0,
            total_unique_workouts: 0,
            most_targeted_muscle_group: None,
            unique_workout_ids: BTreeSet::new(),
        }
    }
}

impl PlanStats {
    /// Compute stats from a plan in a single scan over every
    /// (day, scheduled workout) pair.
    ///
    /// `lookup` resolves catalog ids to definitions. Entries referencing an
    /// id the catalog no longer contains are skipped entirely; a deleted
    /// workout must not sink the rest of the plan.
    pub fn compute<'a, F>(plan: &WorkoutPlan, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a WorkoutDefinition>,
    {
        let mut stats = PlanStats::default();
        let mut muscle_group_frequency: HashMap<String, u32> = HashMap::new();
        // First-encounter order, for deterministic tie-breaking
        let mut muscle_group_order: Vec<String> = Vec::new();

        for day in &plan.days {
            for scheduled in &day.workouts {
                let Some(definition) = lookup(&scheduled.workout_id) else {
                    tracing::warn!(
                        plan_id = %plan.id,
                        workout_id = %scheduled.workout_id,
                        "Plan references unknown workout, skipping entry"
                    );
                    continue;
                };

                let duration = scheduled
                    .custom
                    .as_ref()
                    .and_then(|c| c.duration_min())
                    .unwrap_or(definition.duration_min);

                stats.total_time_min += duration;
                stats.total_calories += f64::from(duration) * definition.calories_burned_per_min;
                stats.unique_workout_ids.insert(definition.id.clone());

                for group in &definition.muscle_groups {
                    let count = muscle_group_frequency.entry(group.clone()).or_insert(0);
                    if *count == 0 {
                        muscle_group_order.push(group.clone());
                    }
                    *count += 1;
                }
            }
        }

        stats.total_unique_workouts = stats.unique_workout_ids.len() as u32;
        stats.most_targeted_muscle_group =
            most_frequent(&muscle_group_frequency, &muscle_group_order);
        stats
    }
}

/// Pick the group with the strictly highest count; on ties the group seen
/// first during the scan wins.
fn most_frequent(frequency: &HashMap<String, u32>, order: &[String]) -> Option<String> {
    let mut best: Option<(&str, u32)> = None;
    for group in order {
        let count = frequency.get(group).copied().unwrap_or(0);
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((group, count));
        }
    }
    best.map(|(group, _)| group.to_string())
}
