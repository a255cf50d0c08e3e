// crates/contacts-cli/src/prompt.rs - Interactive prompt service
//
// Every question the CLI asks goes through `Prompter`. It is generic over its
// input and output so the binary can hand it the locked terminal while tests
// hand it byte buffers.
//
// RETRY CONTRACT:
// - `ask` returns one line, or `InputClosed` once the input is exhausted
// - `ask_until` re-asks until a value passes validation, giving up with
//   `TooManyAttempts` after `max_attempts` tries (0 = no limit)
//
// Neither call ever spins forever on a closed pipe.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input ended before a value was entered")]
    InputClosed,

    #[error("no valid {field} after {attempts} attempts")]
    TooManyAttempts { field: String, attempts: u32 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Line-oriented question/answer channel
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    /// Print `message` (no newline) and read one line
    ///
    /// The trailing line ending is stripped; everything else, including
    /// surrounding spaces, is returned as typed.
    pub fn ask(&mut self, message: &str) -> PromptResult<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask for `field` until `valid` accepts the answer
    ///
    /// `first` is shown on the first attempt and `retry` on every later one.
    pub fn ask_until<F>(
        &mut self,
        field: &str,
        first: &str,
        retry: &str,
        valid: F,
    ) -> PromptResult<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut attempts = 0;
        let mut message = first;

        loop {
            let value = self.ask(message)?;
            attempts += 1;

            if valid(&value) {
                return Ok(value);
            }

            debug!(field, attempts, "rejected input");
            if self.max_attempts != 0 && attempts >= self.max_attempts {
                return Err(PromptError::TooManyAttempts {
                    field: field.to_string(),
                    attempts,
                });
            }
            message = retry;
        }
    }

    /// Print one line of output
    pub fn say(&mut self, line: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub mod testing {
    use super::Prompter;
    use std::io::Cursor;

    pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    /// Prompter fed from a fixed script of input lines
    pub fn scripted(input: &str, max_attempts: u32) -> ScriptedPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), max_attempts)
    }

    /// Everything the prompter printed, prompts included
    pub fn transcript(prompter: ScriptedPrompter) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{scripted, transcript};
    use super::*;

    #[test]
    fn test_ask_strips_line_endings_only() {
        let mut prompter = scripted("  Doe \r\nnext\n", 0);
        assert_eq!(prompter.ask("Name: ").unwrap(), "  Doe ");
        assert_eq!(prompter.ask("Again: ").unwrap(), "next");
        assert_eq!(transcript(prompter), "Name: Again: ");
    }

    #[test]
    fn test_ask_accepts_last_line_without_newline() {
        let mut prompter = scripted("tail", 0);
        assert_eq!(prompter.ask("> ").unwrap(), "tail");
        assert!(matches!(prompter.ask("> "), Err(PromptError::InputClosed)));
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut prompter = scripted("\n", 0);
        assert_eq!(prompter.ask("> ").unwrap(), "");
        assert!(matches!(prompter.ask("> "), Err(PromptError::InputClosed)));
    }

    #[test]
    fn test_ask_until_shows_retry_message() {
        let mut prompter = scripted("bad\nworse\nok\n", 0);
        let value = prompter
            .ask_until("thing", "First: ", "Retry: ", |v| v == "ok")
            .unwrap();

        assert_eq!(value, "ok");
        assert_eq!(transcript(prompter), "First: Retry: Retry: ");
    }

    #[test]
    fn test_ask_until_gives_up_after_max_attempts() {
        let mut prompter = scripted("a\nb\nc\nok\n", 3);
        let result = prompter.ask_until("thing", "? ", "? ", |v| v == "ok");

        assert!(matches!(
            result,
            Err(PromptError::TooManyAttempts { attempts: 3, .. })
        ));
    }

    #[test]
    fn test_ask_until_unbounded_stops_at_end_of_input() {
        let mut prompter = scripted("a\nb\n", 0);
        let result = prompter.ask_until("thing", "? ", "? ", |v| v == "ok");
        assert!(matches!(result, Err(PromptError::InputClosed)));
    }
}
