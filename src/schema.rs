use jsonschema::{validator_for, Validator};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema parse error: {0}")]
    SchemaParse(#[from] serde_json::Error),
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance validation failed: {0}")]
    ValidationFailed(String),
}

/// Compile a JSON Schema (draft 2020-12 unless `$schema` says otherwise).
pub fn compile(schema: &Value) -> Result<Validator, SchemaValidationError> {
    validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))
}

/// Check an instance against a compiled schema, reporting the first violation.
pub fn validate(validator: &Validator, instance: &Value) -> Result<(), SchemaValidationError> {
    match validator.iter_errors(instance).next() {
        None => Ok(()),
        Some(err) => Err(SchemaValidationError::ValidationFailed(err.to_string())),
    }
}

/// Validate a JSON instance against a JSON Schema, both given as text.
/// Returns Ok(()) if valid, Err otherwise.
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaValidationError> {
    let schema_json: Value = serde_json::from_str(schema_str)?;
    let instance_json: Value = serde_json::from_str(instance_str)?;

    let validator = compile(&schema_json)?;
    validate(&validator, &instance_json)
}
