use clap::Parser;

/// Reads one JSON object from stdin and writes one JSON envelope to stdout.
///
/// Input: `{"name": "<text>"}`. Empty input is treated as `{}`.
/// Output: `{"ok": true, "data": {"message", "name_length"}, "error": null}`
/// or `{"ok": false, "data": null, "error": "<reason>"}`.
#[derive(Parser, Debug)]
#[command(name = "greeter", version)]
pub struct Cli {}
