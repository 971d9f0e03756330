//! Line encoding for the response envelope.
//!
//! The reference consumer sees output like
//! `{"ok": true, "data": {...}, "error": null}`: a space after every `,` and
//! `:` and nothing but printable ASCII. Anything outside `' '..='~'` that
//! serde_json would emit raw is written as a `\uXXXX` escape (lowercase hex,
//! surrogate pairs above the BMP).

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::model::Response;

#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Writes the envelope followed by `\n`.
pub fn write_line<W: Write>(mut writer: W, response: &Response) -> io::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, SpacedAsciiFormatter);
    response.serialize(&mut ser).map_err(io::Error::from)?;
    writer.write_all(b"\n")
}

/// The envelope as one line, including the trailing newline.
pub fn to_line(response: &Response) -> io::Result<String> {
    let mut buf = Vec::new();
    write_line(&mut buf, response)?;
    // Formatter output is pure ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
