//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{DischargeTypeValidationError, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyCode,
    UntrimmedCode,
    CodeTooLong,
    EmptyDescription,
    DescriptionTooLong,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyCode => "empty_code",
            ErrorCode::UntrimmedCode => "untrimmed_code",
            ErrorCode::CodeTooLong => "code_too_long",
            ErrorCode::EmptyDescription => "empty_description",
            ErrorCode::DescriptionTooLong => "description_too_long",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const CODE_FIELD: FieldName = FieldName::new("code");
pub(crate) const DESCRIPTION_FIELD: FieldName = FieldName::new("description");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "code": code.as_str(),
        }))
    }
}

fn classify(err: &DischargeTypeValidationError) -> (FieldName, ErrorCode) {
    match err {
        DischargeTypeValidationError::EmptyCode => (CODE_FIELD, ErrorCode::EmptyCode),
        DischargeTypeValidationError::UntrimmedCode => (CODE_FIELD, ErrorCode::UntrimmedCode),
        DischargeTypeValidationError::CodeTooLong { .. } => (CODE_FIELD, ErrorCode::CodeTooLong),
        DischargeTypeValidationError::EmptyDescription => {
            (DESCRIPTION_FIELD, ErrorCode::EmptyDescription)
        }
        DischargeTypeValidationError::DescriptionTooLong { .. } => {
            (DESCRIPTION_FIELD, ErrorCode::DescriptionTooLong)
        }
    }
}

/// Convert a domain validation failure into a `400` payload naming the field.
pub(crate) fn discharge_type_validation_error(err: &DischargeTypeValidationError) -> Error {
    let (field, code) = classify(err);
    ValidationError::new(field.as_str(), err.to_string()).with_code(code)
}

/// As [`discharge_type_validation_error`], for the `index`th element of a list.
pub(crate) fn discharge_type_validation_index_error(
    err: &DischargeTypeValidationError,
    index: usize,
) -> Error {
    let (field, code) = classify(err);
    ValidationError::new(field.as_str(), err.to_string()).with_index(code, index)
}
