//! # Terminal
//!
//! Line-oriented prompt/answer over any reader/writer pair. The binary
//! wires it to stdin/stdout; tests wire it to a `Cursor` and a `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::{AppError, AppResult};

/// Blocking, single-threaded dialogue with the customer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints every line in order.
    pub fn say_all<I, S>(&mut self, lines: I) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Display,
    {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Shows `prompt` (no newline), then blocks for one line of input.
    ///
    /// The returned line has its line terminator stripped but is otherwise
    /// untouched; callers normalize.
    ///
    /// ## Errors
    /// [`AppError::InputClosed`] when the input is exhausted before a line
    /// arrives. Retry loops would otherwise spin forever on a closed stdin.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed {
                prompt: prompt.trim_end().to_string(),
            });
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        trace!(prompt, answer = %answer, "terminal answer");
        Ok(answer)
    }

    /// Gives back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_terminator_only() {
        let mut term = terminal("  Biryani \r\nnext\n");
        assert_eq!(term.ask("Item: ").unwrap(), "  Biryani ");
        assert_eq!(term.ask("Again: ").unwrap(), "next");

        let (_, output) = term.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "Item: Again: ");
    }

    #[test]
    fn test_ask_accepts_last_line_without_newline() {
        let mut term = terminal("yes");
        assert_eq!(term.ask("? ").unwrap(), "yes");
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut term = terminal("");
        let err = term.ask("Enter your order item: ").unwrap_err();
        assert!(matches!(
            err,
            AppError::InputClosed { ref prompt } if prompt == "Enter your order item:"
        ));
    }

    #[test]
    fn test_say_all() {
        let mut term = terminal("");
        term.say_all(["", "a", "b"]).unwrap();
        let (_, output) = term.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "\na\nb\n");
    }
}
