//! egui front end: controller, UI state, and renderer.

/// Controller that owns form and result state.
pub mod controller;
/// Shared state types consumed by the renderer.
pub mod state;
/// egui rendering of the form, result, and status panels.
pub mod ui;
