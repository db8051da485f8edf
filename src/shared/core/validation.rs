use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validation failed: {field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Validation failed: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Character-count bounds check. Counts chars, not bytes.
pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let count = value.chars().count();
    if count < min || count > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}

pub fn check_uuid(field: &'static str, value: &str) -> Result<(), ValidationError> {
    uuid::Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::Invalid {
            field,
            reason: "must be a valid UUID".into(),
        })
}
