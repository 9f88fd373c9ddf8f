//! # Console Token Source
//!
//! Reads answers from a terminal the way a line scanner does: prompts are
//! written before every answer, input is split on whitespace, and several
//! answers typed on one line feed successive prompts.
//!
//! ```text
//!   Choose Burger: 1. Veg  2. Chicken  3. None
//!   3 5                       ◄── answers Burger and Drink
//!   Choose Drink: 1. Coke ... 6. None
//!   Add Sweetness? (yes/no): yes
//! ```

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use meal_core::{CoreError, CoreResult, Prompt, TokenSource};
use tracing::trace;

/// A [`TokenSource`] over any reader/writer pair.
pub struct ConsoleTokens<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleTokens<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleTokens {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Returns the prompt writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn show(&mut self, prompt: Prompt) -> std::io::Result<()> {
        if prompt.is_inline() {
            write!(self.writer, "{}", prompt.text())?;
        } else {
            writeln!(self.writer, "{}", prompt.text())?;
        }
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> TokenSource for ConsoleTokens<R, W> {
    fn next_token(&mut self, prompt: Prompt) -> CoreResult<String> {
        self.show(prompt).map_err(|e| CoreError::Input(e.to_string()))?;

        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(?prompt, %token, "Answer read");
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| CoreError::Input(e.to_string()))?;
            if read == 0 {
                return Err(CoreError::InputExhausted { prompt });
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
