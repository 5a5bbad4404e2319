// crates/tracker-cli/src/stdin.rs - Prompted console input and output
//
// Every menu reads through a Console. Two kinds of reads exist:
// - text fields: one whole line, spaces kept, line terminator stripped
// - numbers: one whole line whose first token must parse as an integer;
//   the rest of the line is thrown away so it never leaks into the next
//   text prompt
//
// MALFORMED NUMBERS:
// An empty line or a non-integer token prints a notice and asks again.
//
// Lines that are not valid UTF-8 are decoded lossily rather than rejected.
//
// END OF INPUT:
// Any read that hits end of input returns `InputError::Eof`; sessions treat
// it like choosing "exit".

use console::style;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::messages;

/// Errors raised while talking to the user
#[derive(Error, Debug)]
pub enum InputError {
    #[error("End of input")]
    Eof,

    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for console interaction
pub type InputResult<T> = Result<T, InputError>;

/// Line-oriented console over any reader/writer pair
///
/// EXAMPLE USAGE:
/// ```rust
/// let stdin = io::stdin();
/// let mut console = Console::new(stdin.lock(), io::stdout());
/// let name = console.prompt_line("Ingrese el nombre del proyecto: ")?;
/// let option = console.prompt_number("Ingrese su opción: ")?;
/// ```
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for multi-line output such as listings
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, mainly so tests can inspect what was printed
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, line: &str) -> InputResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print a highlighted notice about a skipped operation
    pub fn notice(&mut self, line: &str) -> InputResult<()> {
        writeln!(self.output, "{}", style(line).yellow())?;
        Ok(())
    }

    /// Show a prompt and read a whole line of free text
    pub fn prompt_line(&mut self, prompt: &str) -> InputResult<String> {
        self.show_prompt(prompt)?;
        self.read_line()
    }

    /// Show a prompt and read an integer, asking again until one is given
    pub fn prompt_number(&mut self, prompt: &str) -> InputResult<i64> {
        loop {
            self.show_prompt(prompt)?;
            let line = self.read_line()?;
            match parse_number(&line) {
                Some(number) => return Ok(number),
                None => {
                    tracing::debug!(input = %line, "rejected non-numeric input");
                    self.notice(messages::INVALID_NUMBER)?;
                }
            }
        }
    }

    fn show_prompt(&mut self, prompt: &str) -> InputResult<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Bytes that are not valid UTF-8 (e.g. a Latin-1 console) are replaced
    /// with U+FFFD instead of failing the read
    fn read_line(&mut self) -> InputResult<String> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(InputError::Eof);
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// First whitespace-separated token as an integer
fn parse_number(line: &str) -> Option<i64> {
    line.split_whitespace().next()?.parse().ok()
}
