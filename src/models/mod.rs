// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod plan;
pub mod stats;
pub mod workout;

pub use plan::{
    Customization, PlanDay, PlanStatus, PlanSubmission, ScheduledWorkout, SubmissionEntry,
    Weekday, WorkoutPlan,
};
pub use stats::PlanStats;
pub use workout::{DifficultyLevel, WorkoutDefinition};
