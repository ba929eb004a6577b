// SPDX-License-Identifier: MIT

//! Workout plan models: the persisted weekly schedule and the submission
//! payload the composer emits.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Day of the week a workout is scheduled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Short symbol for day-picker UIs ("M", "T", "W", "Th", ...).
    pub fn symbol(&self) -> &'static str {
        match self {
            Weekday::Monday => "M",
            Weekday::Tuesday => "T",
            Weekday::Wednesday => "W",
            Weekday::Thursday => "Th",
            Weekday::Friday => "F",
            Weekday::Saturday => "S",
            Weekday::Sunday => "Su",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// Per-workout customization override.
///
/// Either a sets/reps prescription or a fixed duration, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Customization {
    SetsReps { sets: u32, reps: u32 },
    Duration { duration_min: u32 },
}

impl Customization {
    /// Duration override in minutes, if this customization carries one.
    pub fn duration_min(&self) -> Option<u32> {
        match self {
            Customization::Duration { duration_min } => Some(*duration_min),
            Customization::SetsReps { .. } => None,
        }
    }
}

/// Plan lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum PlanStatus {
    Active,
    Inactive,
}

/// A workout occurrence within a plan day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ScheduledWorkout {
    /// Reference into the workout catalog
    pub workout_id: String,
    /// User customization, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Customization>,
    /// Position within the plan (1-based)
    pub order: u32,
}

/// One day of a plan with its scheduled workouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanDay {
    pub day: Weekday,
    pub workouts: Vec<ScheduledWorkout>,
}

/// Persisted workout plan in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutPlan {
    /// Plan id (also used as document ID)
    pub id: String,
    /// Owning user id
    pub user_id: String,
    pub plan_name: String,
    pub status: PlanStatus,
    /// Display color for the calendar UI (hex, e.g. "#4F46E5")
    pub color: String,
    /// Start date (ISO 8601)
    pub start_date: String,
    /// Optional end date (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Free-text note entered at creation
    #[serde(default)]
    pub note: String,
    pub days: Vec<PlanDay>,
}

/// Submission payload emitted by the plan composer.
///
/// Validated at the API boundary before translation into a [`WorkoutPlan`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanSubmission {
    #[validate(length(min = 1, max = 100, message = "Plan name is required"))]
    pub plan_name: String,
    #[serde(default)]
    pub note: String,
    #[validate(length(min = 1, message = "Add at least one workout to the plan"), nested)]
    pub entries: Vec<SubmissionEntry>,
}

/// One selected workout within a submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmissionEntry {
    #[validate(length(min = 1, message = "Workout id is required"))]
    pub workout_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Customization>,
    #[validate(length(min = 1, message = "At least one day is required"))]
    pub days: Vec<Weekday>,
    pub order: u32,
}
