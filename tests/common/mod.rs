// SPDX-License-Identifier: MIT

use fitplan_tracker::config::Config;
use fitplan_tracker::db::FirestoreDb;
use fitplan_tracker::models::{DifficultyLevel, WorkoutDefinition};
use fitplan_tracker::routes::create_router;
use fitplan_tracker::services::{CatalogService, PlanService};
use fitplan_tracker::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Small fixed catalog used across API tests.
#[allow(dead_code)]
pub fn test_catalog() -> CatalogService {
    CatalogService::new(vec![
        WorkoutDefinition {
            id: "squat".to_string(),
            name: "Barbell Squat".to_string(),
            description: "Compound lower-body lift".to_string(),
            muscle_groups: vec!["legs".to_string(), "core".to_string()],
            calories_burned_per_min: 9.5,
            duration_min: 25,
            equipment: vec!["barbell".to_string()],
            difficulty_level: DifficultyLevel::Intermediate,
        },
        WorkoutDefinition {
            id: "plank".to_string(),
            name: "Plank Hold".to_string(),
            description: "Isometric core hold".to_string(),
            muscle_groups: vec!["core".to_string()],
            calories_burned_per_min: 4.0,
            duration_min: 10,
            equipment: vec![],
            difficulty_level: DifficultyLevel::Beginner,
        },
    ])
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();
    let catalog = test_catalog();
    let plan_service = PlanService::new(db.clone(), catalog.clone());

    let state = Arc::new(AppState {
        config,
        db,
        catalog,
        plan_service,
    });

    (create_router(state.clone()), state)
}

/// Create a test JWT token.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    fitplan_tracker::middleware::auth::create_jwt(user_id, signing_key)
        .expect("Failed to create JWT")
}
