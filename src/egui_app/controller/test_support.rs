use super::*;
use crate::prediction::{
    FieldName, PredictionError, PredictionRequest, PredictionResponse,
};
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

/// Gateway that records every request and answers with a canned reply.
///
/// When built with [`RecordingGateway::gated`], each call blocks until the
/// test releases it, which keeps a request "in flight" on demand.
pub(super) struct RecordingGateway {
    calls: Mutex<Vec<PredictionRequest>>,
    reply: Mutex<Result<PredictionResponse, PredictionError>>,
    gate: Option<Mutex<Receiver<()>>>,
}

impl RecordingGateway {
    pub(super) fn replying(reply: Result<PredictionResponse, PredictionError>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(reply),
            gate: None,
        })
    }

    pub(super) fn gated(
        reply: Result<PredictionResponse, PredictionError>,
    ) -> (Arc<Self>, Sender<()>) {
        let (tx, rx) = channel();
        let gateway = Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(reply),
            gate: Some(Mutex::new(rx)),
        });
        (gateway, tx)
    }

    pub(super) fn set_reply(&self, reply: Result<PredictionResponse, PredictionError>) {
        *self.reply.lock().unwrap() = reply;
    }

    pub(super) fn calls(&self) -> Vec<PredictionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl PredictionGateway for RecordingGateway {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictionError> {
        self.calls.lock().unwrap().push(*request);
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv_timeout(Duration::from_secs(5));
        }
        self.reply.lock().unwrap().clone()
    }
}

pub(super) fn label(prediction: &str) -> Result<PredictionResponse, PredictionError> {
    Ok(PredictionResponse {
        prediction: prediction.to_string(),
    })
}

pub(super) fn controller_with(gateway: Arc<RecordingGateway>) -> EguiController {
    EguiController::new(gateway)
}

pub(super) fn fill_valid(controller: &mut EguiController) {
    controller.update_field(FieldName::Temperature, "25");
    controller.update_field(FieldName::Co, "5");
    controller.update_field(FieldName::No2, "40");
    controller.update_field(FieldName::Humidity, "60");
    controller.update_field(FieldName::PopDensity, "1000");
}

/// Poll until the in-flight request has been applied.
pub(super) fn wait_until_idle(controller: &mut EguiController) {
    for _ in 0..400 {
        controller.poll_background_jobs();
        if !controller.is_submitting() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("prediction did not finish in time");
}

/// Poll until the gateway has seen `count` calls.
pub(super) fn wait_for_calls(gateway: &RecordingGateway, count: usize) {
    for _ in 0..400 {
        if gateway.calls().len() >= count {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("gateway saw {} calls, expected {count}", gateway.calls().len());
}
