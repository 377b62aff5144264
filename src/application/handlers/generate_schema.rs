//! GenerateSchemaHandler - Command handler turning raw project input into a
//! serialized detailed schema.

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::foundation::{ProjectInput, RawProjectInput, SchemaError, Timestamp};
use crate::domain::planning::{serialize, DetailedSchema, SchemaGenerator};

/// Command to generate a schema.
#[derive(Debug, Clone, Default)]
pub struct GenerateSchemaCommand {
    pub input: RawProjectInput,
    /// Overrides the generation timestamp; `None` stamps the current time.
    pub generated_at: Option<Timestamp>,
}

impl GenerateSchemaCommand {
    pub fn new(input: RawProjectInput) -> Self {
        Self {
            input,
            generated_at: None,
        }
    }

    /// Parses a raw input document.
    ///
    /// Unknown keys are ignored; a document that is not a JSON object of
    /// optional strings is rejected as an input error.
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        let input: RawProjectInput = serde_json::from_str(text)
            .map_err(|e| SchemaError::input_shape("document", e.to_string()))?;
        Ok(Self::new(input))
    }

    pub fn at(mut self, generated_at: Timestamp) -> Self {
        self.generated_at = Some(generated_at);
        self
    }
}

/// Result of successful schema generation.
#[derive(Debug, Clone)]
pub struct GenerateSchemaResult {
    pub schema: DetailedSchema,
    /// The schema lowered into primitive values, ready for any transport.
    pub document: Value,
}

/// Handler for schema generation.
#[derive(Default)]
pub struct GenerateSchemaHandler<'a> {
    generator: SchemaGenerator<'a>,
}

impl<'a> GenerateSchemaHandler<'a> {
    pub fn new(generator: SchemaGenerator<'a>) -> Self {
        Self { generator }
    }

    pub fn handle(&self, cmd: GenerateSchemaCommand) -> Result<GenerateSchemaResult, SchemaError> {
        // 1. Parse the raw input
        let input = ProjectInput::try_from(cmd.input).map_err(|err| {
            warn!(field = err.field().unwrap_or("-"), error = %err, "Rejected project input");
            err
        })?;

        // 2. Derive the schema
        let schema = match cmd.generated_at {
            Some(at) => self.generator.generate_at(&input, at)?,
            None => self.generator.generate(&input)?,
        };

        // 3. Lower it for transport
        let document = serialize(&schema)?;

        info!(
            project_type = %schema.project_type,
            complexity = %schema.complexity,
            "Schema generation completed"
        );

        Ok(GenerateSchemaResult { schema, document })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ComplexityTier;

    fn raw(project_type: &str, scale: &str) -> RawProjectInput {
        RawProjectInput {
            project_type: Some(project_type.to_string()),
            scale: Some(scale.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn handles_valid_input() {
        let result = GenerateSchemaHandler::default()
            .handle(GenerateSchemaCommand::new(raw("SaaS", "Large")))
            .unwrap();
        assert_eq!(result.schema.complexity, ComplexityTier::Complex);
        assert_eq!(result.document["project_type"], "saas");
        assert_eq!(result.document["complexity"], "complex");
    }

    #[test]
    fn rejects_missing_scale() {
        let cmd = GenerateSchemaCommand::new(RawProjectInput {
            project_type: Some("api".into()),
            ..Default::default()
        });
        let err = GenerateSchemaHandler::default().handle(cmd).unwrap_err();
        assert_eq!(err.field(), Some("scale"));
    }

    #[test]
    fn rejects_unknown_scale() {
        let err = GenerateSchemaHandler::default()
            .handle(GenerateSchemaCommand::new(raw("api", "huge")))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InputShape { .. }));
    }

    #[test]
    fn parses_json_document() {
        let cmd = GenerateSchemaCommand::from_json(
            r#"{"project_type": "mobile", "scale": "medium", "frontend_preference": "react"}"#,
        )
        .unwrap();
        assert_eq!(cmd.input.project_type.as_deref(), Some("mobile"));
        assert_eq!(cmd.input.frontend_preference.as_deref(), Some("react"));
    }

    #[test]
    fn malformed_document_is_input_error() {
        let err = GenerateSchemaCommand::from_json("[1, 2]").unwrap_err();
        assert_eq!(err.field(), Some("document"));
    }

    #[test]
    fn explicit_timestamp_is_used() {
        let at = Timestamp::now();
        let result = GenerateSchemaHandler::default()
            .handle(GenerateSchemaCommand::new(raw("api", "small")).at(at))
            .unwrap();
        assert_eq!(result.schema.generated_at, at);
    }
}
