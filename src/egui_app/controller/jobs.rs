use crate::prediction::{PredictionError, PredictionGateway, PredictionRequest, PredictionResponse};
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResponse, PredictionError>,
}

/// Background work owned by the controller.
///
/// Workers report back over one channel that the UI thread drains each frame.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    pending_prediction: Option<u64>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            pending_prediction: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.pending_prediction.is_some()
    }

    /// Spawn one request on a worker thread; returns its id, or `None` when one is already running.
    pub(super) fn begin_prediction(
        &mut self,
        gateway: Arc<dyn PredictionGateway>,
        request: PredictionRequest,
    ) -> Option<u64> {
        if self.pending_prediction.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_prediction = Some(request_id);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = gateway.predict(&request);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                request_id,
                result,
            }));
        });
        Some(request_id)
    }

    /// Clear the pending request if `request_id` is the one in flight.
    ///
    /// Returns false for completions that were superseded by a reset.
    pub(super) fn finish_prediction(&mut self, request_id: u64) -> bool {
        if self.pending_prediction == Some(request_id) {
            self.pending_prediction = None;
            true
        } else {
            false
        }
    }

    /// Forget the in-flight request so its completion is ignored.
    pub(super) fn abandon_prediction(&mut self) -> Option<u64> {
        self.pending_prediction.take()
    }
}
