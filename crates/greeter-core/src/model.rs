use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::GreetError;

/// Input after schema and type checks: `name` is text and already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputData {
    pub message: String,
    pub name_length: usize,
}

/// The envelope written to stdout.
///
/// On the wire this is `{"ok", "data", "error"}` with `null` in whichever
/// slot the variant does not use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawResponse")]
pub enum Response {
    Success(OutputData),
    Failure(String),
}

impl Response {
    pub fn success(data: OutputData) -> Self {
        Self::Success(data)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Consumer side: unwrap the data or surface the reported failure.
    pub fn into_data(self) -> Result<OutputData, GreetError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(message) => Err(GreetError::Service(message)),
        }
    }
}

impl From<Result<OutputData, GreetError>> for Response {
    fn from(res: Result<OutputData, GreetError>) -> Self {
        match res {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Response", 3)?;
        match self {
            Self::Success(data) => {
                s.serialize_field("ok", &true)?;
                s.serialize_field("data", data)?;
                s.serialize_field("error", &None::<String>)?;
            }
            Self::Failure(message) => {
                s.serialize_field("ok", &false)?;
                s.serialize_field("data", &None::<OutputData>)?;
                s.serialize_field("error", message)?;
            }
        }
        s.end()
    }
}

// Accepts both explicit nulls and omitted slots.
#[derive(Deserialize)]
struct RawResponse {
    ok: bool,
    #[serde(default)]
    data: Option<OutputData>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawResponse> for Response {
    type Error = String;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        match (raw.ok, raw.data, raw.error) {
            (true, Some(data), _) => Ok(Self::Success(data)),
            (true, None, _) => Err("envelope has ok=true but no data".to_string()),
            (false, _, Some(error)) if !error.is_empty() => Ok(Self::Failure(error)),
            (false, _, _) => Err("envelope has ok=false but no error message".to_string()),
        }
    }
}
