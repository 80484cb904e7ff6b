use serde_json::Value;
use crate::enums::api_error::ApiError;
use crate::structs::slot::Slot;

/// Which envelope the slot endpoint answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEnvelope {
    /// `{ "data": { "slots": [...] } }`
    NestedData,
    /// `{ "slots": [...] }`
    TopLevel,
    /// `{ "data": [...] }`
    DataArray,
    /// `[...]`
    BareArray,
}

/// Reads slot lists out of the envelopes the slot endpoint uses.
pub struct SlotDecoder;

impl SlotDecoder {
    /// Finds the slot array inside any of the known envelopes, in priority order.
    /// A `null` field does not claim its envelope.
    pub fn locate(body: &Value) -> Option<(SlotEnvelope, &Value)> {
        if let Some(slots) = body.get("data").and_then(|data| data.get("slots")).filter(|v| !v.is_null()) {
            return Some((SlotEnvelope::NestedData, slots));
        }
        if let Some(slots) = body.get("slots").filter(|v| !v.is_null()) {
            return Some((SlotEnvelope::TopLevel, slots));
        }
        if let Some(data) = body.get("data").filter(|data| data.is_array()) {
            return Some((SlotEnvelope::DataArray, data));
        }
        if body.is_array() {
            return Some((SlotEnvelope::BareArray, body));
        }
        None
    }

    pub fn decode(body: Value) -> Result<Vec<Slot>, ApiError> {
        let (envelope, slots) = Self::locate(&body)
            .ok_or_else(|| ApiError::Decode(format!("unrecognized slot envelope: {}", Self::shape_of(&body))))?;

        if !slots.is_array() {
            return Err(ApiError::Decode(format!("{envelope:?} envelope does not hold an array")));
        }

        log::debug!("Slot response matched {:?} envelope", envelope);
        Ok(serde_json::from_value(slots.clone())?)
    }

    fn shape_of(body: &Value) -> String {
        match body {
            Value::Object(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                format!("object with keys [{}]", keys.join(", "))
            }
            Value::Array(_) => "array".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Number(_) => "number".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Null => "null".to_string(),
        }
    }
}
