//! Discharge type reference data.
//!
//! A discharge type describes how a patient left the hospital (for example
//! "discharged home" or "transferred"). Each type is keyed by a short code
//! that never changes once created; only the description can be edited.

use std::fmt;

/// Maximum number of characters in a discharge type code.
pub const DISCHARGE_TYPE_CODE_MAX: usize = 10;
/// Maximum number of characters in a discharge type description.
pub const DISCHARGE_TYPE_DESCRIPTION_MAX: usize = 100;

/// Validation errors raised when building discharge type values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DischargeTypeValidationError {
    /// The code was empty.
    #[error("discharge type code must not be empty")]
    EmptyCode,
    /// The code carried leading or trailing whitespace.
    #[error("discharge type code must not contain surrounding whitespace")]
    UntrimmedCode,
    /// The code exceeded [`DISCHARGE_TYPE_CODE_MAX`].
    #[error("discharge type code must be at most {max} characters")]
    CodeTooLong { max: usize },
    /// The description was empty or whitespace.
    #[error("discharge type description must not be empty")]
    EmptyDescription,
    /// The description exceeded [`DISCHARGE_TYPE_DESCRIPTION_MAX`].
    #[error("discharge type description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
}

/// Unique, immutable key of a discharge type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DischargeTypeCode(String);

impl DischargeTypeCode {
    /// Validate and construct a code.
    ///
    /// # Examples
    /// ```
    /// use hospital_backend::domain::DischargeTypeCode;
    ///
    /// let code = DischargeTypeCode::new("ZZ").expect("valid code");
    /// assert_eq!(code.as_ref(), "ZZ");
    /// assert!(DischargeTypeCode::new(" ZZ").is_err());
    /// ```
    pub fn new(code: impl Into<String>) -> Result<Self, DischargeTypeValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(DischargeTypeValidationError::EmptyCode);
        }
        if code.trim() != code {
            return Err(DischargeTypeValidationError::UntrimmedCode);
        }
        if code.chars().count() > DISCHARGE_TYPE_CODE_MAX {
            return Err(DischargeTypeValidationError::CodeTooLong {
                max: DISCHARGE_TYPE_CODE_MAX,
            });
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for DischargeTypeCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DischargeTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DischargeTypeCode> for String {
    fn from(value: DischargeTypeCode) -> Self {
        value.0
    }
}

/// Human-readable label of a discharge type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DischargeTypeDescription(String);

impl DischargeTypeDescription {
    /// Validate and construct a description.
    pub fn new(description: impl Into<String>) -> Result<Self, DischargeTypeValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DischargeTypeValidationError::EmptyDescription);
        }
        if description.chars().count() > DISCHARGE_TYPE_DESCRIPTION_MAX {
            return Err(DischargeTypeValidationError::DescriptionTooLong {
                max: DISCHARGE_TYPE_DESCRIPTION_MAX,
            });
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for DischargeTypeDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<DischargeTypeDescription> for String {
    fn from(value: DischargeTypeDescription) -> Self {
        value.0
    }
}

/// A discharge category: code plus description.
///
/// # Examples
/// ```
/// use hospital_backend::domain::DischargeType;
///
/// let discharge_type = DischargeType::try_from_strings("ZZ", "aDescription")
///     .expect("valid discharge type");
/// assert_eq!(discharge_type.code().as_ref(), "ZZ");
/// assert_eq!(discharge_type.description().as_ref(), "aDescription");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DischargeType {
    code: DischargeTypeCode,
    description: DischargeTypeDescription,
}

impl DischargeType {
    /// Assemble a discharge type from validated parts.
    pub fn new(code: DischargeTypeCode, description: DischargeTypeDescription) -> Self {
        Self { code, description }
    }

    /// Validate raw strings and build a discharge type.
    pub fn try_from_strings(
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DischargeTypeValidationError> {
        Ok(Self::new(
            DischargeTypeCode::new(code)?,
            DischargeTypeDescription::new(description)?,
        ))
    }

    /// Unique key.
    pub fn code(&self) -> &DischargeTypeCode {
        &self.code
    }

    /// Human-readable label.
    pub fn description(&self) -> &DischargeTypeDescription {
        &self.description
    }

    /// Split into owned parts.
    pub fn into_parts(self) -> (DischargeTypeCode, DischargeTypeDescription) {
        (self.code, self.description)
    }
}
