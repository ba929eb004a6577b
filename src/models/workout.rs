// SPDX-License-Identifier: MIT

//! Workout catalog model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Immutable catalog entry describing an exercise.
///
/// Stored in the `workouts` collection, read-only to plan composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutDefinition {
    /// Catalog id (also used as document ID)
    pub id: String,
    /// Display name (e.g. "Barbell Squat")
    pub name: String,
    /// Short description shown in the catalog listing
    pub description: String,
    /// Muscle groups targeted (e.g. "legs", "core")
    pub muscle_groups: Vec<String>,
    /// Estimated calorie burn rate
    pub calories_burned_per_min: f64,
    /// Default duration when a plan entry carries no override
    pub duration_min: u32,
    /// Required equipment, empty for bodyweight exercises
    pub equipment: Vec<String>,
    /// Difficulty rating
    pub difficulty_level: DifficultyLevel,
}

/// Difficulty rating for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}
