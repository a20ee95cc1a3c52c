//! Library exports for reuse in integration tests.
/// Per-user application directories.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Log file setup and pruning.
pub mod logging;
/// Survival classifier artifact, scoring, and placement.
pub mod model;
/// Passenger form domain types and feature encoding.
pub mod passenger;
/// User settings read from the config folder.
pub mod settings;
