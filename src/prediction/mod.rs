//! Form validation, the prediction service client, and result presentation.
//!
//! Everything here is UI-agnostic: the egui controller and the command line
//! tool both drive the same [`FormState`], [`PredictionGateway`] and
//! [`present`] functions.

pub mod fields;
pub mod form;
pub mod gateway;
pub mod presenter;
pub mod validation;

pub use fields::{FieldName, FieldRule};
pub use form::{FieldInput, FormState};
pub use gateway::{
    HttpPredictionGateway, PredictionError, PredictionGateway, PredictionRequest,
    PredictionResponse,
};
pub use presenter::{ResultImage, ResultView, present};
pub use validation::{FieldError, ValidationResult, validate_field};
