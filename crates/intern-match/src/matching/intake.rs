use serde_json::{Map, Value};

use super::domain::CandidateProfile;

/// Fields a recommendation request must name, checked in this order.
pub const REQUIRED_PROFILE_FIELDS: [&str; 4] = ["education", "skills", "interests", "location"];

/// Validation errors raised while turning a request body into a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Build a [`CandidateProfile`] from a raw request body.
///
/// The listed fields must be present, but `null` counts as present and scores as empty.
pub fn profile_from_request(body: Value) -> Result<CandidateProfile, ProfileValidationError> {
    let Value::Object(mut fields) = body else {
        return Err(ProfileValidationError::NotAnObject);
    };

    if let Some(missing) = REQUIRED_PROFILE_FIELDS
        .into_iter()
        .find(|field| !fields.contains_key(*field))
    {
        return Err(ProfileValidationError::MissingField(missing));
    }

    Ok(CandidateProfile {
        education: text_field(&mut fields, "education")?,
        skills: list_field(&mut fields, "skills")?,
        interests: list_field(&mut fields, "interests")?,
        location: text_field(&mut fields, "location")?,
    })
}

fn text_field(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<String, ProfileValidationError> {
    match fields.remove(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(ProfileValidationError::InvalidField {
            field,
            reason: format!("expected a string, found {}", kind(&other)),
        }),
    }
}

fn list_field(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ProfileValidationError> {
    let items = match fields.remove(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ProfileValidationError::InvalidField {
                field,
                reason: format!("expected a list of strings, found {}", kind(&other)),
            })
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(label) => Ok(label),
            other => Err(ProfileValidationError::InvalidField {
                field,
                reason: format!("expected a list of strings, found an entry of {}", kind(&other)),
            }),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
