//! Error types for the schema engine.

use std::fmt;
use thiserror::Error;

/// Errors raised while deriving a technical schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Static reference data is malformed or a selection policy has no target.
    #[error("Reference table '{table}' is misconfigured: {reason}")]
    Configuration { table: String, reason: String },

    /// The caller supplied input the engine cannot interpret.
    #[error("Field '{field}' is invalid: {reason}")]
    InputShape { field: String, reason: String },

    /// The aggregate could not be lowered into primitive values.
    #[error("Schema serialization failed: {0}")]
    Serialization(String),
}

impl SchemaError {
    /// Creates a configuration error for a named table.
    pub fn configuration(table: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Configuration {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Creates an input shape error tagged with the offending field.
    pub fn input_shape(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InputShape {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an input shape error for a missing mandatory field.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::input_shape(field, "field is required")
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SchemaError::Configuration { .. } => ErrorCode::ConfigurationError,
            SchemaError::InputShape { .. } => ErrorCode::InputShapeError,
            SchemaError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Returns the offending input field, if this is an input error.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::InputShape { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Serialization(err.to_string())
    }
}

/// Error codes exposed to transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigurationError,
    InputShapeError,
    SerializationError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ConfigurationError => "CONFIGURATION_ERROR",
            ErrorCode::InputShapeError => "INPUT_SHAPE_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_shape_error_displays_field() {
        let err = SchemaError::input_shape("scale", "unknown value 'huge'");
        assert_eq!(
            format!("{}", err),
            "Field 'scale' is invalid: unknown value 'huge'"
        );
        assert_eq!(err.field(), Some("scale"));
    }

    #[test]
    fn missing_field_uses_required_reason() {
        let err = SchemaError::missing_field("project_type");
        assert_eq!(format!("{}", err), "Field 'project_type' is invalid: field is required");
    }

    #[test]
    fn configuration_error_displays_table() {
        let err = SchemaError::configuration("technology_catalog", "frontend has no entries");
        assert_eq!(
            format!("{}", err),
            "Reference table 'technology_catalog' is misconfigured: frontend has no entries"
        );
        assert!(err.field().is_none());
    }

    #[test]
    fn codes_map_to_variants() {
        assert_eq!(
            SchemaError::configuration("t", "r").code(),
            ErrorCode::ConfigurationError
        );
        assert_eq!(
            SchemaError::missing_field("scale").code(),
            ErrorCode::InputShapeError
        );
        assert_eq!(
            SchemaError::Serialization("boom".into()).code(),
            ErrorCode::SerializationError
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InputShapeError), "INPUT_SHAPE_ERROR");
        assert_eq!(format!("{}", ErrorCode::ConfigurationError), "CONFIGURATION_ERROR");
    }
}
