pub mod edit;
pub mod session;

use std::io::{self, BufRead, Write};

pub use edit::edit_figure;
pub use session::{Command, Session, SessionOutcome};

/// Print a prompt line and read the answer
/// Returns None at end of input; the line terminator is stripped
pub(crate) fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_strips_terminators() {
        let mut input = Cursor::new("first\r\nsecond\n");
        let mut output = Vec::new();

        assert_eq!(
            prompt_line(&mut input, &mut output, "?").unwrap(),
            Some("first".to_string())
        );
        assert_eq!(
            prompt_line(&mut input, &mut output, "?").unwrap(),
            Some("second".to_string())
        );
        assert_eq!(prompt_line(&mut input, &mut output, "?").unwrap(), None);
        assert_eq!(String::from_utf8(output).unwrap(), "?\n?\n?\n");
    }
}
