use super::jobs::PredictionJobResult;
use super::*;
use crate::prediction::{FieldName, ResultView, ValidationResult, present};

/// What a call to [`EguiController::submit`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field was invalid; no request was sent.
    Rejected,
    /// A request was started.
    Started,
    /// A request is already in flight; nothing new was sent.
    AlreadySubmitting,
}

impl EguiController {
    /// Store new raw text for a field. Never fails; errors show once touched.
    pub fn update_field(&mut self, field: FieldName, raw: impl Into<String>) {
        self.ui.form.set_raw(field, raw);
    }

    /// Mark a field as touched so its error, if any, becomes visible.
    pub fn blur_field(&mut self, field: FieldName) {
        self.ui.form.touch(field);
    }

    /// Validate the current inputs without side effects.
    pub fn validate(&self) -> ValidationResult {
        self.ui.form.validate()
    }

    /// Validate and, when everything passes, send one prediction request.
    ///
    /// Invalid input never reaches the gateway.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.jobs.prediction_in_progress() {
            return SubmitOutcome::AlreadySubmitting;
        }
        self.ui.form.touch_all();
        let validation = self.validate();
        let Some(request) = validation.request() else {
            let invalid = validation.errors().len();
            tracing::debug!("Submit blocked by {invalid} invalid field(s)");
            self.set_status(
                format!("Fix {invalid} invalid field(s) before predicting"),
                StatusTone::Warning,
            );
            return SubmitOutcome::Rejected;
        };
        let Some(request_id) = self.jobs.begin_prediction(self.gateway.clone(), request) else {
            return SubmitOutcome::AlreadySubmitting;
        };
        tracing::info!("Submitting prediction request #{request_id}: {request:?}");
        self.ui.prediction.submitting = true;
        self.ui.prediction.last_error = None;
        self.set_status("Requesting prediction…", StatusTone::Busy);
        SubmitOutcome::Started
    }

    /// Clear every field, touched flag, result and error. No network call.
    pub fn reset(&mut self) {
        if let Some(request_id) = self.jobs.abandon_prediction() {
            tracing::info!("Discarding in-flight prediction request #{request_id}");
        }
        self.ui.form.reset();
        self.ui.prediction.clear();
        self.set_status("Form cleared", StatusTone::Idle);
    }

    /// What the result panel should show for the current label.
    pub fn result_view(&self) -> Option<ResultView> {
        present(self.ui.prediction.result.as_deref())
    }

    pub(super) fn handle_prediction_finished(&mut self, message: PredictionJobResult) {
        if !self.jobs.finish_prediction(message.request_id) {
            tracing::debug!(
                "Ignoring stale prediction result #{}",
                message.request_id
            );
            return;
        }
        self.ui.prediction.submitting = false;
        match message.result {
            Ok(response) => {
                tracing::info!(
                    "Prediction #{} returned '{}'",
                    message.request_id,
                    response.prediction
                );
                self.set_status(
                    format!("Air Quality is {}", response.prediction),
                    StatusTone::Info,
                );
                self.ui.prediction.last_error = None;
                self.ui.prediction.result = Some(response.prediction);
            }
            Err(err) => {
                tracing::warn!("Prediction #{} failed: {err}", message.request_id);
                self.ui.prediction.last_error = Some(err.to_string());
                self.set_status(format!("Prediction failed: {err}"), StatusTone::Error);
            }
        }
    }
}
