//! Forward serialization of a form for export or saving.
//!
//! Output is the ordered field array: JSON for humans, MessagePack for
//! compact snapshots. Nothing in the designer reads these back.

use crate::model::FormState;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("MessagePack encoding failed: {0}")]
    MsgPack(#[from] rmp_serde::encode::Error),
}

/// Pretty-printed JSON array of fields, 2-space indented.
pub fn to_json_pretty(state: &FormState) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Compact MessagePack encoding (field names kept, so the shape is self-describing).
pub fn to_msgpack(state: &FormState) -> Result<Vec<u8>, PersistError> {
    Ok(rmp_serde::to_vec_named(state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::FieldId;
    use crate::model::{FieldDefinition, FieldKind, Options};

    fn sample() -> FormState {
        let mut name = FieldDefinition::new(FieldId::intern("p_name"), FieldKind::Text, "Name");
        name.required = true;
        let mut size = FieldDefinition::new(FieldId::intern("p_size"), FieldKind::RadioGroup, "Size");
        size.options = Options::from_vec(vec!["S".into(), "L".into()]);
        FormState::from_unique(vec![name, size])
    }

    #[test]
    fn json_has_field_shape() {
        let json = to_json_pretty(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let fields = value.as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["id"], "p_name");
        assert_eq!(fields[0]["type"], "text");
        assert_eq!(fields[0]["required"], true);
        assert!(fields[0].get("placeholder").is_none());
        assert!(fields[0].get("options").is_none());
        assert_eq!(fields[1]["type"], "radio");
        assert_eq!(fields[1]["options"], serde_json::json!(["S", "L"]));
    }

    #[test]
    fn json_decodes_back_to_same_fields() {
        let state = sample();
        let json = to_json_pretty(&state).unwrap();
        let decoded: FormState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn msgpack_decodes_back_to_same_fields() {
        let state = sample();
        let bytes = to_msgpack(&state).unwrap();
        let decoded: FormState = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn empty_form_is_empty_array() {
        assert_eq!(to_json_pretty(&FormState::new()).unwrap(), "[]");
    }
}
