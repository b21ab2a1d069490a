//! Shared state types for the egui UI.

mod prediction;
mod status;

pub use prediction::PredictionUiState;
pub use status::StatusBarState;

use crate::prediction::FormState;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Raw field inputs and touched flags.
    pub form: FormState,
    pub prediction: PredictionUiState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: FormState::default(),
            prediction: PredictionUiState::default(),
        }
    }
}
