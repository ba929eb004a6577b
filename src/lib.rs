// SPDX-License-Identifier: MIT

//! Fitplan-Tracker: workout plan composition and statistics backend
//!
//! This crate provides the backend API for composing weekly workout plans
//! from a workout catalog and serving persisted plans with derived
//! statistics (weekly time, calorie burn, most targeted muscle group).

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{CatalogService, PlanService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub catalog: CatalogService,
    pub plan_service: PlanService,
}
