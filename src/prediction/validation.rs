//! Per-field range checks and the aggregate submittable verdict.

use super::fields::FieldName;
use super::gateway::PredictionRequest;

/// Why a single field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The input was empty or whitespace.
    Required,
    /// The input did not parse to a number, or parsed to NaN.
    NotANumber,
    BelowMinimum,
    AboveMaximum,
}

impl FieldError {
    /// Human-readable message naming the violated rule.
    pub fn message(self, field: FieldName) -> String {
        let rule = field.rule();
        match self {
            Self::Required => rule.required_message.to_string(),
            Self::NotANumber => format!("{} must be a number", rule.display_name),
            Self::BelowMinimum => rule.below_min_message.to_string(),
            Self::AboveMaximum => rule.above_max_message.to_string(),
        }
    }
}

/// Parse and range-check a raw input string.
///
/// Surrounding whitespace is ignored; the remainder must be accepted by
/// `f64::from_str` and not be NaN. Infinities and overflowing exponents fall
/// through to the range checks. Both bounds are inclusive.
pub fn validate_field(field: FieldName, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    let value: f64 = trimmed.parse().map_err(|_| FieldError::NotANumber)?;
    if value.is_nan() {
        return Err(FieldError::NotANumber);
    }
    let rule = field.rule();
    if value < rule.min {
        return Err(FieldError::BelowMinimum);
    }
    if value > rule.max {
        return Err(FieldError::AboveMaximum);
    }
    Ok(value)
}

/// Outcome of validating all five fields at once.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    outcomes: [Result<f64, FieldError>; 5],
}

impl ValidationResult {
    /// Validate every field, reading raw input through `raw`.
    pub fn from_inputs<'a>(raw: impl Fn(FieldName) -> &'a str) -> Self {
        Self {
            outcomes: FieldName::ALL.map(|field| validate_field(field, raw(field))),
        }
    }

    pub fn outcome(&self, field: FieldName) -> Result<f64, FieldError> {
        self.outcomes[field.index()]
    }

    pub fn error(&self, field: FieldName) -> Option<FieldError> {
        self.outcome(field).err()
    }

    /// Message for an invalid field, `None` when the field is ok.
    pub fn message(&self, field: FieldName) -> Option<String> {
        self.error(field).map(|err| err.message(field))
    }

    /// True iff every field is valid.
    pub fn is_submittable(&self) -> bool {
        self.outcomes.iter().all(Result::is_ok)
    }

    /// Invalid fields with their messages, in form order.
    pub fn errors(&self) -> Vec<(FieldName, String)> {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| self.message(field).map(|message| (field, message)))
            .collect()
    }

    /// Build the request payload when the form is submittable.
    pub fn request(&self) -> Option<PredictionRequest> {
        Some(PredictionRequest {
            temperature: self.outcome(FieldName::Temperature).ok()?,
            co: self.outcome(FieldName::Co).ok()?,
            no2: self.outcome(FieldName::No2).ok()?,
            humidity: self.outcome(FieldName::Humidity).ok()?,
            pop_density: self.outcome(FieldName::PopDensity).ok()?,
        })
    }
}
