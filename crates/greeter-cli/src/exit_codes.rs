//! Exit codes of the `greeter` binary.
//! A failure envelope is still a delivered answer, so it exits with SUCCESS.

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 2; // Envelope could not be written to stdout
