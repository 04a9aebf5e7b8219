//! Human-readable validation messages.

use std::collections::BTreeMap;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Flatten `validator` errors into `{ "Title": ["..."] }`.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let name = display_name(&field);
            let messages = errors.iter().map(|e| describe(&name, e)).collect();
            (name, messages)
        })
        .collect()
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "required" => format!("The {field} field is required."),
        "length" => match error.params.get("max").and_then(Value::as_u64) {
            Some(max) => {
                format!("The field {field} must be a string with a maximum length of {max}.")
            }
            None => format!("The field {field} has an invalid length."),
        },
        _ => format!("The field {field} is invalid."),
    }
}

fn display_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
