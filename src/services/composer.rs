// SPDX-License-Identifier: MIT

//! Plan composer: session state machine for building a workout plan.
//!
//! A composer owns a snapshot of the workout catalog and the user's working
//! selection. All operations are synchronous and single-owner; validation
//! failures are returned as [`ComposeError`] values and never disturb the
//! rest of the selection.

use std::collections::{BTreeSet, HashSet};

use crate::models::{Customization, PlanSubmission, SubmissionEntry, Weekday, WorkoutDefinition};

/// A workout chosen for the plan under construction.
///
/// `is_editing` drives the customization panel in the UI and is never
/// serialized or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedWorkout {
    pub workout_id: String,
    pub custom: Option<Customization>,
    pub days: BTreeSet<Weekday>,
    /// Position within the plan (1-based, contiguous)
    pub order: u32,
    pub is_editing: bool,
}

/// Numeric customization field addressed by [`PlanComposer::set_custom_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomField {
    Sets,
    Reps,
    DurationMin,
}

/// Validation failures surfaced to the user as inline messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("Workout {0} is not in the catalog")]
    UnknownWorkout(String),

    #[error("Workout {0} is not selected")]
    NotSelected(String),

    #[error("At least one day is required")]
    EmptyDays,

    #[error("Add at least one workout to the plan")]
    EmptySelection,

    #[error("Reorder must list each selected workout exactly once")]
    InvalidReorder,
}

/// Builds a [`PlanSubmission`] from a catalog and a working selection.
#[derive(Debug, Clone, Default)]
pub struct PlanComposer {
    catalog: Vec<WorkoutDefinition>,
    selected: Vec<SelectedWorkout>,
}

impl PlanComposer {
    /// Create a composer over a catalog snapshot, fetched once per session.
    pub fn new(catalog: Vec<WorkoutDefinition>) -> Self {
        Self {
            catalog,
            selected: Vec::new(),
        }
    }

    /// The catalog this composer was created with.
    pub fn catalog(&self) -> &[WorkoutDefinition] {
        &self.catalog
    }

    /// Current selection, in plan order.
    pub fn selected(&self) -> &[SelectedWorkout] {
        &self.selected
    }

    /// Whether a workout is currently part of the selection.
    pub fn is_selected(&self, workout_id: &str) -> bool {
        self.selected.iter().any(|w| w.workout_id == workout_id)
    }

    /// Case-insensitive substring filter over the catalog by workout name.
    /// A pure view; never touches the selection.
    pub fn filtered_catalog(&self, query: &str) -> Vec<&WorkoutDefinition> {
        let needle = query.to_lowercase();
        self.catalog
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Add a workout to the selection, or remove it if already selected.
    ///
    /// A newly added workout starts with no customization, all seven days
    /// selected, and order appended at the end. Calling twice restores the
    /// prior state.
    pub fn toggle_selection(&mut self, workout_id: &str) -> Result<(), ComposeError> {
        if let Some(pos) = self.selected.iter().position(|w| w.workout_id == workout_id) {
            self.selected.remove(pos);
            self.renumber();
            return Ok(());
        }

        if !self.catalog.iter().any(|w| w.id == workout_id) {
            return Err(ComposeError::UnknownWorkout(workout_id.to_string()));
        }

        self.selected.push(SelectedWorkout {
            workout_id: workout_id.to_string(),
            custom: None,
            days: Weekday::ALL.into_iter().collect(),
            order: self.selected.len() as u32 + 1,
            is_editing: false,
        });
        Ok(())
    }

    /// Flip the customization panel for one selection.
    ///
    /// Entering edit mode seeds the sets/reps default; leaving it drops the
    /// override entirely.
    pub fn toggle_editing(&mut self, workout_id: &str) -> Result<(), ComposeError> {
        let workout = self.selected_mut(workout_id)?;
        workout.is_editing = !workout.is_editing;
        workout.custom = if workout.is_editing {
            Some(Customization::SetsReps { sets: 1, reps: 1 })
        } else {
            None
        };
        Ok(())
    }

    /// Switch the override between sets/reps and duration.
    ///
    /// Always resets to the target mode's defaults; numeric values are not
    /// carried across the switch.
    pub fn set_customization_mode(
        &mut self,
        workout_id: &str,
        use_duration: bool,
    ) -> Result<(), ComposeError> {
        let workout = self.selected_mut(workout_id)?;
        workout.custom = Some(if use_duration {
            Customization::Duration { duration_min: 1 }
        } else {
            Customization::SetsReps { sets: 1, reps: 1 }
        });
        Ok(())
    }

    /// Set one numeric override field.
    ///
    /// The override adopts the variant the field belongs to; the sibling
    /// field keeps its value when the variant is unchanged and falls back to
    /// the default when switching. No upper bound is enforced here.
    pub fn set_custom_value(
        &mut self,
        workout_id: &str,
        field: CustomField,
        value: u32,
    ) -> Result<(), ComposeError> {
        let workout = self.selected_mut(workout_id)?;
        workout.custom = Some(match (field, workout.custom) {
            (CustomField::Sets, Some(Customization::SetsReps { reps, .. })) => {
                Customization::SetsReps { sets: value, reps }
            }
            (CustomField::Sets, _) => Customization::SetsReps {
                sets: value,
                reps: 1,
            },
            (CustomField::Reps, Some(Customization::SetsReps { sets, .. })) => {
                Customization::SetsReps { sets, reps: value }
            }
            (CustomField::Reps, _) => Customization::SetsReps {
                sets: 1,
                reps: value,
            },
            (CustomField::DurationMin, _) => Customization::Duration {
                duration_min: value,
            },
        });
        Ok(())
    }

    /// Replace the day-set for one selection.
    ///
    /// Rejected iff `days` is empty; the prior set stays untouched. Every
    /// non-empty set replaces the prior one exactly.
    pub fn set_days(
        &mut self,
        workout_id: &str,
        days: BTreeSet<Weekday>,
    ) -> Result<(), ComposeError> {
        if days.is_empty() {
            return Err(ComposeError::EmptyDays);
        }
        let workout = self.selected_mut(workout_id)?;
        workout.days = days;
        Ok(())
    }

    /// Apply a full permutation of the current selection.
    ///
    /// `sequence` must list each selected workout id exactly once; order is
    /// reassigned to position + 1 and every other field is preserved.
    pub fn reorder(&mut self, sequence: &[String]) -> Result<(), ComposeError> {
        if sequence.len() != self.selected.len() {
            return Err(ComposeError::InvalidReorder);
        }
        let unique: HashSet<&str> = sequence.iter().map(String::as_str).collect();
        if unique.len() != sequence.len() || !sequence.iter().all(|id| self.is_selected(id)) {
            return Err(ComposeError::InvalidReorder);
        }

        let mut reordered = Vec::with_capacity(self.selected.len());
        for id in sequence {
            let pos = self
                .selected
                .iter()
                .position(|w| &w.workout_id == id)
                .ok_or(ComposeError::InvalidReorder)?;
            reordered.push(self.selected.remove(pos));
        }
        self.selected = reordered;
        self.renumber();
        Ok(())
    }

    /// Build the submission payload for the selection.
    ///
    /// Fails with [`ComposeError::EmptySelection`] when nothing is selected;
    /// the caller disables the submit action rather than erroring.
    pub fn build_submission(
        &self,
        plan_name: &str,
        note: &str,
    ) -> Result<PlanSubmission, ComposeError> {
        if self.selected.is_empty() {
            return Err(ComposeError::EmptySelection);
        }

        let entries = self
            .selected
            .iter()
            .map(|w| SubmissionEntry {
                workout_id: w.workout_id.clone(),
                custom: w.custom,
                days: w.days.iter().copied().collect(),
                order: w.order,
            })
            .collect();

        Ok(PlanSubmission {
            plan_name: plan_name.to_string(),
            note: note.to_string(),
            entries,
        })
    }

    fn selected_mut(&mut self, workout_id: &str) -> Result<&mut SelectedWorkout, ComposeError> {
        self.selected
            .iter_mut()
            .find(|w| w.workout_id == workout_id)
            .ok_or_else(|| ComposeError::NotSelected(workout_id.to_string()))
    }

    /// Keep order contiguous after removals and reorders.
    fn renumber(&mut self) {
        for (index, workout) in self.selected.iter_mut().enumerate() {
            workout.order = index as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DifficultyLevel;

    fn make_workout(id: &str, name: &str) -> WorkoutDefinition {
        WorkoutDefinition {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            muscle_groups: vec!["legs".to_string()],
            calories_burned_per_min: 8.0,
            duration_min: 30,
            equipment: vec![],
            difficulty_level: DifficultyLevel::Intermediate,
        }
    }

    fn composer() -> PlanComposer {
        PlanComposer::new(vec![
            make_workout("squat", "Barbell Squat"),
            make_workout("deadlift", "Deadlift"),
            make_workout("plank", "Plank Hold"),
        ])
    }

    #[test]
    fn test_toggle_adds_with_defaults() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();

        let selected = &composer.selected()[0];
        assert_eq!(selected.workout_id, "squat");
        assert_eq!(selected.custom, None);
        assert_eq!(selected.days.len(), 7);
        assert_eq!(selected.order, 1);
        assert!(!selected.is_editing);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer.toggle_selection("deadlift").unwrap();

        composer.toggle_selection("squat").unwrap();
        composer.toggle_selection("squat").unwrap();

        let ids: Vec<&str> = composer
            .selected()
            .iter()
            .map(|w| w.workout_id.as_str())
            .collect();
        assert_eq!(ids, vec!["deadlift", "squat"]);

        composer.toggle_selection("squat").unwrap();
        assert!(!composer.is_selected("squat"));
        assert!(composer.is_selected("deadlift"));
    }

    #[test]
    fn test_toggle_unknown_workout_rejected() {
        let mut composer = composer();
        let err = composer.toggle_selection("bench").unwrap_err();
        assert_eq!(err, ComposeError::UnknownWorkout("bench".to_string()));
        assert!(composer.selected().is_empty());
    }

    #[test]
    fn test_removal_renumbers_remaining() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer.toggle_selection("deadlift").unwrap();
        composer.toggle_selection("plank").unwrap();

        composer.toggle_selection("squat").unwrap();

        let orders: Vec<u32> = composer.selected().iter().map(|w| w.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_set_days_empty_rejected_and_unchanged() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer
            .set_days("squat", [Weekday::Monday].into_iter().collect())
            .unwrap();

        let err = composer.set_days("squat", BTreeSet::new()).unwrap_err();
        assert_eq!(err, ComposeError::EmptyDays);
        let expected: BTreeSet<Weekday> = [Weekday::Monday].into_iter().collect();
        assert_eq!(composer.selected()[0].days, expected);
    }

    #[test]
    fn test_set_days_replaces_exactly() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();

        let days: BTreeSet<Weekday> = [Weekday::Tuesday, Weekday::Saturday].into_iter().collect();
        composer.set_days("squat", days.clone()).unwrap();
        assert_eq!(composer.selected()[0].days, days);
    }

    #[test]
    fn test_toggle_editing_seeds_and_clears_override() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();

        composer.toggle_editing("squat").unwrap();
        assert!(composer.selected()[0].is_editing);
        assert_eq!(
            composer.selected()[0].custom,
            Some(Customization::SetsReps { sets: 1, reps: 1 })
        );

        composer.toggle_editing("squat").unwrap();
        assert!(!composer.selected()[0].is_editing);
        assert_eq!(composer.selected()[0].custom, None);
    }

    #[test]
    fn test_mode_switch_resets_values() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer
            .set_custom_value("squat", CustomField::Sets, 5)
            .unwrap();
        composer
            .set_custom_value("squat", CustomField::Reps, 8)
            .unwrap();

        composer.set_customization_mode("squat", true).unwrap();
        assert_eq!(
            composer.selected()[0].custom,
            Some(Customization::Duration { duration_min: 1 })
        );

        composer.set_customization_mode("squat", false).unwrap();
        assert_eq!(
            composer.selected()[0].custom,
            Some(Customization::SetsReps { sets: 1, reps: 1 })
        );
    }

    #[test]
    fn test_set_custom_value_keeps_sibling_field() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer
            .set_custom_value("squat", CustomField::Sets, 4)
            .unwrap();
        composer
            .set_custom_value("squat", CustomField::Reps, 12)
            .unwrap();

        assert_eq!(
            composer.selected()[0].custom,
            Some(Customization::SetsReps { sets: 4, reps: 12 })
        );
    }

    #[test]
    fn test_set_custom_value_switches_variant() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer
            .set_custom_value("squat", CustomField::Sets, 4)
            .unwrap();

        composer
            .set_custom_value("squat", CustomField::DurationMin, 25)
            .unwrap();
        assert_eq!(
            composer.selected()[0].custom,
            Some(Customization::Duration { duration_min: 25 })
        );

        // Back to sets/reps: the old sets value is gone, defaults seed in
        composer
            .set_custom_value("squat", CustomField::Reps, 10)
            .unwrap();
        assert_eq!(
            composer.selected()[0].custom,
            Some(Customization::SetsReps { sets: 1, reps: 10 })
        );
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer.toggle_selection("deadlift").unwrap();
        composer.toggle_selection("plank").unwrap();
        composer
            .set_days("deadlift", [Weekday::Friday].into_iter().collect())
            .unwrap();

        composer
            .reorder(&[
                "plank".to_string(),
                "squat".to_string(),
                "deadlift".to_string(),
            ])
            .unwrap();

        let ids: Vec<&str> = composer
            .selected()
            .iter()
            .map(|w| w.workout_id.as_str())
            .collect();
        assert_eq!(ids, vec!["plank", "squat", "deadlift"]);

        let orders: Vec<u32> = composer.selected().iter().map(|w| w.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);

        // Other fields ride along untouched
        let expected: BTreeSet<Weekday> = [Weekday::Friday].into_iter().collect();
        assert_eq!(composer.selected()[2].days, expected);
    }

    #[test]
    fn test_reorder_rejects_non_permutations() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer.toggle_selection("deadlift").unwrap();

        // Missing entry
        assert_eq!(
            composer.reorder(&["squat".to_string()]),
            Err(ComposeError::InvalidReorder)
        );
        // Duplicate entry
        assert_eq!(
            composer.reorder(&["squat".to_string(), "squat".to_string()]),
            Err(ComposeError::InvalidReorder)
        );
        // Unselected entry
        assert_eq!(
            composer.reorder(&["squat".to_string(), "plank".to_string()]),
            Err(ComposeError::InvalidReorder)
        );

        // Selection untouched by the failed calls
        let ids: Vec<&str> = composer
            .selected()
            .iter()
            .map(|w| w.workout_id.as_str())
            .collect();
        assert_eq!(ids, vec!["squat", "deadlift"]);
    }

    #[test]
    fn test_build_submission_empty_selection_fails() {
        let composer = composer();
        assert_eq!(
            composer.build_submission("My Plan", "").unwrap_err(),
            ComposeError::EmptySelection
        );
    }

    #[test]
    fn test_build_submission_carries_selection() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();
        composer.toggle_selection("plank").unwrap();
        composer
            .set_days("plank", [Weekday::Monday, Weekday::Wednesday].into_iter().collect())
            .unwrap();
        composer
            .set_custom_value("plank", CustomField::DurationMin, 5)
            .unwrap();

        let submission = composer.build_submission("Core Week", "easy start").unwrap();

        assert_eq!(submission.plan_name, "Core Week");
        assert_eq!(submission.note, "easy start");
        assert_eq!(submission.entries.len(), 2);

        let plank = &submission.entries[1];
        assert_eq!(plank.workout_id, "plank");
        assert_eq!(plank.order, 2);
        assert_eq!(plank.days, vec![Weekday::Monday, Weekday::Wednesday]);
        assert_eq!(
            plank.custom,
            Some(Customization::Duration { duration_min: 5 })
        );
    }

    #[test]
    fn test_filtered_catalog_is_case_insensitive_view() {
        let mut composer = composer();
        composer.toggle_selection("squat").unwrap();

        let hits = composer.filtered_catalog("DEAD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "deadlift");

        // Empty query matches everything; selection is untouched either way
        assert_eq!(composer.filtered_catalog("").len(), 3);
        assert!(composer.is_selected("squat"));
    }
}
