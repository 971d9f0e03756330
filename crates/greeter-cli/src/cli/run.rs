use std::io::{Read, Write};

use anyhow::Context;
use greeter_core::{respond, write_line};

use crate::exit_codes;

/// Answers exactly one request: read `input` to the end, write one envelope
/// line to `output`.
pub fn run<R: Read, W: Write>(input: R, mut output: W) -> anyhow::Result<i32> {
    let response = respond(input);
    tracing::debug!(ok = response.is_ok(), "writing envelope");
    write_line(&mut output, &response).context("failed to write response to stdout")?;
    output.flush().context("failed to flush stdout")?;
    Ok(exit_codes::SUCCESS)
}
