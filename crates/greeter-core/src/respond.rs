use std::io::Read;

use serde_json::Value;

use crate::errors::GreetError;
use crate::model::{InputRecord, OutputData, Response};
use crate::reader::read_input;
use crate::validate::validate;

pub const GREETING_PREFIX: &str = "Hello from Python, ";

pub fn greet(input: &InputRecord) -> OutputData {
    OutputData {
        message: format!("{GREETING_PREFIX}{}!", input.name),
        name_length: input.name.chars().count(),
    }
}

/// Validates an already parsed document and builds the greeting.
pub fn run(value: Value) -> Result<OutputData, GreetError> {
    let input = validate(value)?;
    tracing::debug!(name_length = input.name.chars().count(), "input validated");
    Ok(greet(&input))
}

/// Runs the whole pipeline over a byte stream. Never fails: every error is
/// folded into [`Response::Failure`].
pub fn respond<R: Read>(reader: R) -> Response {
    let result = read_input(reader).and_then(run);
    if let Err(e) = &result {
        tracing::warn!(code = e.code(), error = %e, "request rejected");
    }
    Response::from(result)
}
