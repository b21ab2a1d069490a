/// Result side of the form: last label, last failure, and in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionUiState {
    /// Label from the last successful response.
    pub result: Option<String>,
    /// Message from the last failed submission, distinct from "no result yet".
    pub last_error: Option<String>,
    /// True while a request is in flight.
    pub submitting: bool,
}

impl PredictionUiState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
