// SPDX-License-Identifier: MIT

//! Workout catalog loading and lookup service.
//!
//! The catalog is read once at startup, either from the `workouts`
//! collection or from a JSON seed file for local development. A transport
//! failure degrades to an empty catalog; the UI renders an empty state
//! instead of an error.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::db::FirestoreDb;
use crate::models::WorkoutDefinition;

/// Service holding the in-memory workout catalog.
#[derive(Debug, Default, Clone)]
pub struct CatalogService {
    workouts: Vec<WorkoutDefinition>,
    by_id: HashMap<String, usize>,
}

impl CatalogService {
    /// Build a catalog from a list of definitions.
    pub fn new(workouts: Vec<WorkoutDefinition>) -> Self {
        let by_id = workouts
            .iter()
            .enumerate()
            .map(|(index, w)| (w.id.clone(), index))
            .collect();
        Self { workouts, by_id }
    }

    /// Load the catalog, preferring Firestore and degrading without retry:
    /// empty or unreachable collection falls back to the seed file, and a
    /// missing seed file yields an empty catalog.
    pub async fn load(db: &FirestoreDb, seed_path: &str) -> Self {
        match db.list_workouts().await {
            Ok(workouts) if !workouts.is_empty() => {
                tracing::info!(count = workouts.len(), "Loaded workout catalog");
                return Self::new(workouts);
            }
            Ok(_) => {
                tracing::warn!("Workout collection is empty, trying seed file");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load workout catalog, trying seed file");
            }
        }

        match Self::load_from_file(seed_path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(path = seed_path, error = %e, "No workout catalog available");
                Self::default()
            }
        }
    }

    /// Load the catalog from a JSON seed file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON array of workout definitions.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let workouts: Vec<WorkoutDefinition> =
            serde_json::from_str(json_data).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(count = workouts.len(), "Loaded workout catalog from seed");
        Ok(Self::new(workouts))
    }

    /// All catalog entries, in load order.
    pub fn workouts(&self) -> &[WorkoutDefinition] {
        &self.workouts
    }

    /// Resolve a catalog entry by id.
    pub fn get(&self, id: &str) -> Option<&WorkoutDefinition> {
        self.by_id.get(id).map(|&index| &self.workouts[index])
    }

    /// Case-insensitive substring search on workout name.
    pub fn search(&self, query: &str) -> Vec<&WorkoutDefinition> {
        let needle = query.to_lowercase();
        self.workouts
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
