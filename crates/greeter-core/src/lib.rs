//! Core of the `greeter` stdin filter.
//!
//! One JSON document in, one envelope out:
//!
//! ```text
//! stdin ──▶ reader ──▶ validate ──▶ respond ──▶ wire ──▶ stdout
//!           (blank = {})  (trim, type)  (greeting)   (one line)
//! ```
//!
//! Every failure along the way is folded into [`Response::Failure`], so the
//! caller always gets exactly one well-formed line.

pub mod errors;
pub mod model;
pub mod reader;
pub mod respond;
pub mod validate;
pub mod wire;

pub use errors::GreetError;
pub use model::{InputRecord, OutputData, Response};
pub use respond::{greet, respond, run, GREETING_PREFIX};
pub use validate::{validate, NAME_FIELD};
pub use wire::{to_line, write_line};
