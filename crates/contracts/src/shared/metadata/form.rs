//! Conversion between typed records and the string-valued state of an edit form.
//!
//! A form holds one JSON string per visible field, exactly as typed. Saving
//! validates every field and converts it back to the JSON type the backend
//! expects.

use super::field_type::FieldKind;
use super::types::FieldMetadata;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Validation failure of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Render any JSON scalar the way it is shown in a table cell or input.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Build form state from a serialized record.
pub fn record_to_form(record: &Value, fields: &[FieldMetadata]) -> Value {
    let mut form = Map::new();
    for field in fields.iter().filter(|f| f.visible_in_form()) {
        let text = match field.kind {
            FieldKind::Password => String::new(),
            _ => record.get(field.name).map(display_value).unwrap_or_default(),
        };
        form.insert(field.name.to_string(), Value::String(text));
    }
    Value::Object(form)
}

pub fn form_text(form: &Value, name: &str) -> String {
    form.get(name).map(display_value).unwrap_or_default()
}

pub fn set_form_text(form: &mut Value, name: &str, text: String) {
    if let Value::Object(map) = form {
        map.insert(name.to_string(), Value::String(text));
    }
}

/// Validate the form and convert it into a record body.
///
/// All failing fields are reported at once. Blank optional fields become
/// `null`, except blank passwords, which are omitted.
pub fn form_to_record(form: &Value, fields: &[FieldMetadata]) -> Result<Value, Vec<FieldError>> {
    let mut record = Map::new();
    let mut errors = Vec::new();

    for field in fields.iter().filter(|f| f.visible_in_form()) {
        let raw = form_text(form, field.name);
        let text = raw.trim();

        if let Err(message) = field.validation.validate(field.kind, text, field.label()) {
            errors.push(FieldError {
                field: field.name,
                message,
            });
            continue;
        }

        if text.is_empty() {
            if field.kind != FieldKind::Password {
                record.insert(field.name.to_string(), Value::Null);
            }
            continue;
        }

        let value = match field.kind {
            FieldKind::Integer | FieldKind::Reference(_) => {
                text.parse::<i64>().map(Value::from).ok()
            }
            FieldKind::Number => text
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
            _ => Some(Value::String(text.to_string())),
        };

        match value {
            Some(value) => {
                record.insert(field.name.to_string(), value);
            }
            None => errors.push(FieldError {
                field: field.name,
                message: format!("{} has an invalid value", field.label()),
            }),
        }
    }

    if errors.is_empty() {
        Ok(Value::Object(record))
    } else {
        Err(errors)
    }
}
