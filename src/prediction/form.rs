//! Raw form inputs plus explicit per-field "touched" tracking.

use super::fields::FieldName;
use super::validation::{FieldError, ValidationResult, validate_field};

/// Raw text for one field and whether its error may be shown yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub raw: String,
    pub touched: bool,
}

/// The five form inputs.
///
/// Errors stay hidden until a field has been blurred or a submit was
/// attempted; validity itself is always derived from the current strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    inputs: [FieldInput; 5],
}

impl FormState {
    pub fn input(&self, field: FieldName) -> &FieldInput {
        &self.inputs[field.index()]
    }

    pub fn raw(&self, field: FieldName) -> &str {
        &self.input(field).raw
    }

    /// Mutable access to the raw text, for widgets that edit in place.
    pub fn raw_mut(&mut self, field: FieldName) -> &mut String {
        &mut self.inputs[field.index()].raw
    }

    /// Replace the raw text of a field. Never fails, even for invalid text.
    pub fn set_raw(&mut self, field: FieldName, raw: impl Into<String>) {
        self.inputs[field.index()].raw = raw.into();
    }

    /// Mark a field as touched (typically on blur).
    pub fn touch(&mut self, field: FieldName) {
        self.inputs[field.index()].touched = true;
    }

    /// Mark every field as touched, as a submit attempt does.
    pub fn touch_all(&mut self) {
        for input in &mut self.inputs {
            input.touched = true;
        }
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.input(field).touched
    }

    pub fn field_error(&self, field: FieldName) -> Option<FieldError> {
        validate_field(field, self.raw(field)).err()
    }

    /// Error message to display for a field, if it is touched and invalid.
    pub fn visible_error(&self, field: FieldName) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.field_error(field).map(|err| err.message(field))
    }

    /// Validate all fields against their rules.
    pub fn validate(&self) -> ValidationResult {
        ValidationResult::from_inputs(|field| self.raw(field))
    }

    /// Clear every input and touched flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_pristine(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut form = FormState::default();
        form.set_raw(FieldName::Co, "500");
        assert_eq!(form.field_error(FieldName::Co), Some(FieldError::AboveMaximum));
        assert_eq!(form.visible_error(FieldName::Co), None);

        form.touch(FieldName::Co);
        assert_eq!(
            form.visible_error(FieldName::Co).as_deref(),
            Some("CO cannot exceed 100 ppm")
        );
        assert_eq!(form.visible_error(FieldName::No2), None);
    }

    #[test]
    fn touch_all_reveals_required_messages() {
        let mut form = FormState::default();
        form.touch_all();
        for field in FieldName::ALL {
            assert_eq!(
                form.visible_error(field),
                Some(field.rule().required_message.to_string())
            );
        }
    }

    #[test]
    fn editing_recomputes_validity() {
        let mut form = FormState::default();
        form.touch(FieldName::Humidity);
        form.set_raw(FieldName::Humidity, "101");
        assert!(form.visible_error(FieldName::Humidity).is_some());
        form.raw_mut(FieldName::Humidity).pop();
        assert_eq!(form.raw(FieldName::Humidity), "10");
        assert_eq!(form.visible_error(FieldName::Humidity), None);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut form = FormState::default();
        form.set_raw(FieldName::Temperature, "12");
        form.touch_all();
        form.reset();
        assert!(form.is_pristine());
        form.reset();
        assert!(form.is_pristine());
        for field in FieldName::ALL {
            assert_eq!(form.raw(field), "");
            assert!(!form.is_touched(field));
        }
    }
}
