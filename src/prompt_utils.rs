//! Line-oriented prompt helpers for the interactive session.
//!
//! Generic over the reader and writer so whole sessions can be
//! scripted in tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::Error;

/// Reads one line from the reader, trimming surrounding whitespace.
/// Returns `None` once the input is exhausted.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Writes a prompt, flushes it, and reads the response line.
pub fn prompt_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;
    read_trimmed_line(reader)
}

/// Prompts for a value parsed with `FromStr`.
///
/// An unparsable response reports `invalid` to the writer and yields `None`,
/// sending the caller back to the menu. End of input also yields `None`.
pub fn prompt_parse<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    invalid: Error,
) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let Some(line) = prompt_line(reader, writer, prompt)? else {
        return Ok(None);
    };
    match line.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(writer, "{invalid}")?;
            Ok(None)
        }
    }
}
