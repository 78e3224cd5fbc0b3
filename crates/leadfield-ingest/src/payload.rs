//! Typed ingestion of the upstream partner-field payload.
//!
//! The payload is a JSON object mapping opaque field keys to descriptors.
//! Shape checking happens once, here at the boundary: downstream code only
//! ever sees well-formed descriptors.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use leadfield_model::FieldDescriptor;

/// Upstream response envelope for a partner-field fetch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartnerFieldsResponse {
    #[serde(default)]
    pub fields: Value,
}

/// Parse the raw field mapping into ordered `(key, descriptor)` pairs.
///
/// Fail-soft at every level: a payload that is not a JSON object yields an
/// empty sequence, and individual entries that do not conform to the
/// descriptor shape are skipped without aborting their siblings. Output
/// order follows the payload's own key order.
pub fn parse_payload(payload: &Value) -> Vec<(String, FieldDescriptor)> {
    let Value::Object(entries) = payload else {
        warn!(
            payload_type = payload_type_name(payload),
            "partner field payload is not an object, ignoring"
        );
        return Vec::new();
    };
    let mut descriptors = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
        match serde_json::from_value::<FieldDescriptor>(entry.clone()) {
            Ok(descriptor) => descriptors.push((key.clone(), descriptor)),
            Err(error) => {
                debug!(key = %key, %error, "skipping malformed field descriptor");
            }
        }
    }
    descriptors
}

fn payload_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
