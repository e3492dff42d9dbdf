//! Line-oriented prompting for terminals that can't run the full UI.
//!
//! Used when output is not a terminal or a screen reader is in use: every
//! question is a printed prompt answered by one line on the input.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Read one line, without its trailing newline. `None` at end of input.
pub fn read_line(input: &mut dyn BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Print `prompt` without a newline and read the answer.
pub fn prompt_line(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let line = read_line(input)?;
    if line.is_none() {
        writeln!(output)?;
    }
    Ok(line)
}

/// Print a field's title and description, followed by a blank line.
pub fn write_header(output: &mut dyn Write, title: &str, description: &str) -> Result<()> {
    if !title.is_empty() {
        writeln!(output, "{title}")?;
    }
    if !description.is_empty() {
        writeln!(output, "{description}")?;
    }
    if !title.is_empty() || !description.is_empty() {
        writeln!(output)?;
    }
    Ok(())
}

/// Print a validation error.
pub fn write_error(output: &mut dyn Write, err: &str) -> Result<()> {
    writeln!(output, "Error: {err}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_strips_newlines() {
        let mut input = "one\r\ntwo\nthree".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("one"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("two"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("three"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_line_writes_prompt() {
        let mut input = "yes\n".as_bytes();
        let mut output = Vec::new();
        let answer = prompt_line(&mut input, &mut output, "Continue? ").unwrap();
        assert_eq!(answer.as_deref(), Some("yes"));
        assert_eq!(output, b"Continue? ");
    }

    #[test]
    fn test_header_and_error() {
        let mut output = Vec::new();
        write_header(&mut output, "Fruits", "").unwrap();
        write_error(&mut output, "required").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Fruits\n\nError: required\n");

        let mut empty = Vec::new();
        write_header(&mut empty, "", "").unwrap();
        assert!(empty.is_empty());
    }
}
