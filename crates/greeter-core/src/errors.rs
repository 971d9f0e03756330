use thiserror::Error;

/// Every way a single invocation can fail.
///
/// The `Display` text is what ends up in the envelope's `error` field.
#[derive(Debug, Error)]
pub enum GreetError {
    #[error("failed to read input: {0}")]
    Read(String),

    /// Passed through from the JSON parser unchanged.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("input should be a JSON object, got {found}")]
    Schema { found: &'static str },

    #[error("field required: {field}")]
    MissingField { field: &'static str },

    #[error("field '{field}' should be a valid string, got {found}")]
    Type {
        field: &'static str,
        found: &'static str,
    },

    #[error("service error: {0}")]
    Service(String),
}

pub mod codes {
    pub const E_READ: &str = "E_READ";
    pub const E_PARSE: &str = "E_PARSE";
    pub const E_SCHEMA: &str = "E_SCHEMA";
    pub const E_MISSING_FIELD: &str = "E_MISSING_FIELD";
    pub const E_TYPE: &str = "E_TYPE";
    pub const E_SERVICE: &str = "E_SERVICE";
}

impl GreetError {
    /// Stable code for log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read(_) => codes::E_READ,
            Self::Parse(_) => codes::E_PARSE,
            Self::Schema { .. } => codes::E_SCHEMA,
            Self::MissingField { .. } => codes::E_MISSING_FIELD,
            Self::Type { .. } => codes::E_TYPE,
            Self::Service(_) => codes::E_SERVICE,
        }
    }
}

impl From<std::io::Error> for GreetError {
    fn from(e: std::io::Error) -> Self {
        Self::Read(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for GreetError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::Read(e.to_string())
    }
}

/// JSON type name as used in error messages.
pub(crate) fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_is_verbatim() {
        let inner = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
        let expected = inner.to_string();
        let err = GreetError::from(inner);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.code(), codes::E_PARSE);
    }

    #[test]
    fn messages_name_the_field_and_type() {
        let err = GreetError::Type {
            field: "name",
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "field 'name' should be a valid string, got number"
        );

        let err = GreetError::MissingField { field: "name" };
        assert!(err.to_string().contains("name"));
        assert_eq!(err.code(), codes::E_MISSING_FIELD);
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = GreetError::from(bad);
        assert_eq!(err.code(), codes::E_READ);
        assert!(err.to_string().starts_with("failed to read input"));
    }
}
