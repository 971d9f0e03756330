use std::io::Read;

use serde_json::Value;

use crate::errors::GreetError;
use crate::validate::strip;

/// Reads the whole stream and parses it as one JSON document.
pub fn read_input<R: Read>(mut reader: R) -> Result<Value, GreetError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    tracing::debug!(bytes = buf.len(), "read input");
    let text = String::from_utf8(buf)?;
    parse_input(&text)
}

/// Blank input counts as `{}`.
pub fn parse_input(text: &str) -> Result<Value, GreetError> {
    if strip(text).is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_blank_are_empty_object() {
        assert_eq!(parse_input("").unwrap(), json!({}));
        assert_eq!(parse_input(" \n\t\r ").unwrap(), json!({}));
        assert_eq!(read_input(&b""[..]).unwrap(), json!({}));
    }

    #[test]
    fn separator_only_input_is_empty_object() {
        assert_eq!(parse_input("\x1c").unwrap(), json!({}));
        assert_eq!(parse_input("\x1f \n\x1d").unwrap(), json!({}));
    }

    #[test]
    fn out_of_range_number_in_ignored_field_parses() {
        let v = parse_input(r#"{"name": "Ada", "x": 1e400}"#).unwrap();
        assert_eq!(v["name"], json!("Ada"));
        assert!(v["x"].is_number());
    }

    #[test]
    fn parses_document() {
        let v = read_input(&br#"{"name": "Ada"}"#[..]).unwrap();
        assert_eq!(v, json!({"name": "Ada"}));
    }

    #[test]
    fn malformed_is_parse_error() {
        let err = parse_input("not valid json").unwrap_err();
        assert!(matches!(err, GreetError::Parse(_)));
    }

    #[test]
    fn trailing_garbage_is_parse_error() {
        let err = parse_input(r#"{"name": "Ada"} extra"#).unwrap_err();
        assert!(matches!(err, GreetError::Parse(_)));
    }

    #[test]
    fn non_utf8_is_read_error() {
        let err = read_input(&[0xc3, 0x28][..]).unwrap_err();
        assert!(matches!(err, GreetError::Read(_)));
    }
}
