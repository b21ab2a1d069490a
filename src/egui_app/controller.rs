//! Controller that owns form/result state and bridges it to the egui renderer.

mod jobs;
mod prediction;

#[cfg(test)]
mod test_support;

pub use prediction::SubmitOutcome;

use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::PredictionGateway;
use jobs::{ControllerJobs, JobMessage};
use std::sync::Arc;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    gateway: Arc<dyn PredictionGateway>,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Create a controller that sends predictions through `gateway`.
    pub fn new(gateway: Arc<dyn PredictionGateway>) -> Self {
        Self {
            ui: UiState::default(),
            gateway,
            jobs: ControllerJobs::new(),
        }
    }

    /// Apply finished background work. Call once per frame.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::PredictionFinished(message) => {
                    self.handle_prediction_finished(message);
                }
            }
        }
    }

    /// True while a prediction request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.jobs.prediction_in_progress()
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
