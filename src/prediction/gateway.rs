//! Client for the remote air-quality prediction service.

use serde::{Deserialize, Serialize, Serializer};

use crate::config::EndpointSettings;
use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// JSON body sent to the prediction endpoint.
///
/// Whole numbers go out without a fractional part (`25`, not `25.0`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(serialize_with = "serialize_reading")]
    pub temperature: f64,
    #[serde(serialize_with = "serialize_reading")]
    pub co: f64,
    #[serde(serialize_with = "serialize_reading")]
    pub no2: f64,
    #[serde(serialize_with = "serialize_reading")]
    pub humidity: f64,
    #[serde(serialize_with = "serialize_reading")]
    pub pop_density: f64,
}

/// Largest magnitude below which every integral `f64` converts to `i64` exactly.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

fn serialize_reading<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Successful reply from the prediction endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionResponse {
    /// Label as sent by the server, untouched.
    pub prediction: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    #[error("Prediction service returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    Json(String),
    #[error("Response did not contain a prediction")]
    MissingPrediction,
}

/// Anything that can turn five readings into a label.
///
/// The desktop controller and CLI hold a boxed gateway so tests can swap
/// in a fake transport.
pub trait PredictionGateway: Send + Sync {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictionError>;
}

/// Gateway that POSTs JSON to a configured URL.
pub struct HttpPredictionGateway {
    agent: ureq::Agent,
    url: String,
}

impl HttpPredictionGateway {
    pub fn new(url: impl Into<String>, agent: ureq::Agent) -> Self {
        Self {
            agent,
            url: url.into(),
        }
    }

    /// Build a gateway from persisted endpoint settings.
    pub fn from_settings(settings: &EndpointSettings) -> Result<Self, crate::config::ConfigError> {
        let url = settings.parsed_url()?;
        Ok(Self::new(
            url.as_str(),
            http_client::agent(settings.timeouts()),
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PredictionGateway for HttpPredictionGateway {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictionError> {
        let req = self
            .agent
            .post(&self.url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match req.send_json(request) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = http_client::read_response_text(response, MAX_RESPONSE_BYTES)
                    .unwrap_or_else(|err| err);
                return Err(map_status_error(status, &body));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictionError::Transport(err.to_string()));
            }
        };

        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
            .map_err(|err| PredictionError::Transport(format!("Failed to read response: {err}")))?;
        let body = String::from_utf8(bytes)
            .map_err(|err| PredictionError::Json(format!("Response is not UTF-8: {err}")))?;
        parse_prediction_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct PredictionResponseWire {
    prediction: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
}

/// Text of a non-null `error` member; non-string values keep their JSON form.
fn error_message(error: Option<serde_json::Value>) -> Option<String> {
    match error? {
        serde_json::Value::Null => None,
        serde_json::Value::String(message) => Some(message),
        other => Some(other.to_string()),
    }
}

fn map_status_error(status: u16, body: &str) -> PredictionError {
    let message = serde_json::from_str::<PredictionResponseWire>(body.trim())
        .ok()
        .and_then(|wire| error_message(wire.error))
        .unwrap_or_else(|| body.trim().to_string());
    PredictionError::Server { status, message }
}

fn parse_prediction_response(body: &str) -> Result<PredictionResponse, PredictionError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictionError::Json("Empty response body".to_string()));
    }
    let wire: PredictionResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictionError::Json(format!("{err}: {trimmed}")))?;
    match wire.prediction {
        Some(serde_json::Value::String(prediction)) => Ok(PredictionResponse { prediction }),
        Some(other) => Err(PredictionError::Json(format!(
            "prediction is not a string: {other}"
        ))),
        None => match error_message(wire.error) {
            Some(message) => Err(PredictionError::Server {
                status: 200,
                message,
            }),
            None => Err(PredictionError::MissingPrediction),
        },
    }
}
