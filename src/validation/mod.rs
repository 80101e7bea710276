use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::candidates::NewCandidate;

/// Fields the create route refuses to proceed without, in the order their
/// failure messages are reported.
const REQUIRED_FIELDS: [&str; 3] = ["first_name", "last_name", "industry_connected"];

/// Wire shape of a create request. Every field is optional at the serde
/// layer so a single pass can report all missing fields at once; the
/// validator below decides what is actually acceptable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidatePayload {
    #[validate(required, custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[validate(required, custom(function = "not_blank"))]
    pub last_name: Option<String>,
    #[validate(required, custom(function = "boolean_like"))]
    pub industry_connected: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_id: Option<i64>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn boolean_like(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Bool(_) => Ok(()),
        Value::Number(number) if matches!(number.as_i64(), Some(0) | Some(1)) => Ok(()),
        _ => Err(ValidationError::new("boolean_like")),
    }
}

/// Checks the payload against the required-field list. Pure; on failure
/// returns one human-readable message per missing or ill-typed field.
///
/// A whitespace-only string counts as missing, same as an absent field or an
/// explicit null.
pub fn validate_payload(payload: &CandidatePayload) -> Result<(), Vec<String>> {
    let errors = match payload.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let by_field = errors.field_errors();
    let mut messages = Vec::new();
    for field in REQUIRED_FIELDS {
        let Some(field_errors) = by_field.get(field) else {
            continue;
        };
        for error in field_errors.iter() {
            match error.code.as_ref() {
                "boolean_like" => {
                    messages.push(format!("invalid type for field: {field} (expected boolean)"))
                }
                _ => messages.push(format!("missing required field: {field}")),
            }
        }
    }

    Err(messages)
}

impl CandidatePayload {
    /// Insert-side record. Call only after `validate_payload` has passed;
    /// the required fields are then known to be present.
    pub fn to_record(&self) -> NewCandidate {
        NewCandidate {
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            industry_connected: self.industry_connected_flag(),
            party_id: self.party_id,
        }
    }

    /// The boolean-like field normalized to the 0/1 integer the table stores.
    pub fn industry_connected_flag(&self) -> i64 {
        match &self.industry_connected {
            Some(Value::Bool(true)) => 1,
            Some(Value::Number(number)) => number.as_i64().unwrap_or(0),
            _ => 0,
        }
    }
}
