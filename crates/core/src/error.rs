/// Errors raised while building or dumping a record.
///
/// Every variant aborts record construction; nothing is recovered
/// internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Field '{field}' must be {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Field '{field}' {message}")]
    FieldConstraint {
        field: &'static str,
        message: String,
    },

    #[error("Not a valid domain: '{domain}'")]
    InvalidDomain { domain: String },

    #[error("Age should be in between 0 and 100, got {age}")]
    AgeOutOfRange { age: i64 },

    #[error("Patients older than 60 must have an emergency contact (age {age})")]
    MissingEmergencyContact { age: i64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::FieldType { field, .. } | Self::FieldConstraint { field, .. } => Some(*field),
            Self::InvalidDomain { .. } => Some("email"),
            Self::AgeOutOfRange { .. } => Some("age"),
            Self::MissingEmergencyContact { .. } => Some("contact_details"),
            Self::Serialization(_) => None,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FieldType { .. } => "FIELD_TYPE_ERROR",
            Self::FieldConstraint { .. } => "FIELD_CONSTRAINT_ERROR",
            Self::InvalidDomain { .. } => "INVALID_DOMAIN",
            Self::AgeOutOfRange { .. } => "AGE_OUT_OF_RANGE",
            Self::MissingEmergencyContact { .. } => "MISSING_EMERGENCY_CONTACT",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    pub(crate) fn constraint(field: &'static str, message: impl Into<String>) -> Self {
        Self::FieldConstraint {
            field,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
