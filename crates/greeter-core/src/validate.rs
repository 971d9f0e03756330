//! Schema check for the input document.
//!
//! Order matters: the top-level shape is checked first, then `name` is
//! trimmed (only when it is a string), then presence and type are checked on
//! the preprocessed value.

use serde_json::{Map, Value};

use crate::errors::{json_type_name, GreetError};
use crate::model::InputRecord;

pub const NAME_FIELD: &str = "name";

/// Unicode whitespace plus the information separators U+001C..=U+001F.
pub fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn strip(s: &str) -> &str {
    s.trim_matches(is_strip_char)
}

/// Trims a string `name` in place. Any other value is left as is and
/// rejected later by the type check.
pub fn preprocess(map: &mut Map<String, Value>) {
    if let Some(Value::String(s)) = map.get_mut(NAME_FIELD) {
        let trimmed = strip(s);
        if trimmed.len() != s.len() {
            *s = trimmed.to_string();
        }
    }
}

pub fn validate(value: Value) -> Result<InputRecord, GreetError> {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(GreetError::Schema {
                found: json_type_name(&other),
            })
        }
    };

    preprocess(&mut map);

    match map.remove(NAME_FIELD) {
        None => Err(GreetError::MissingField { field: NAME_FIELD }),
        Some(Value::String(name)) => Ok(InputRecord { name }),
        Some(other) => Err(GreetError::Type {
            field: NAME_FIELD,
            found: json_type_name(&other),
        }),
    }
}
