//! # Actor
//!
//! An [`Actor`] holds one conversation with the operator. It owns the input it
//! reads answers from and the output it writes questions to. All prompts and
//! confirmations are methods on it (see [`crate::prompt`] and
//! [`crate::confirm`]).
//!
//! Every method takes `&mut self`, so a single actor can only ask one question
//! at a time. To talk over several streams, build one actor per stream.
use crate::InteractError;
use crate::utils::Terminal;
use std::io::{self, Read, Stdin, Stdout, Write};

/// Asks the operator questions over an input source and an output sink.
pub struct Actor<R, W> {
    pub(crate) terminal: Terminal<R, W>,
}

impl<R: Read, W: Write> Actor<R, W> {
    /// Creates an actor reading answers from `input` and writing to `output`.
    ///
    /// Nothing is written until the first question is asked.
    pub fn new(input: R, output: W) -> Self {
        Actor {
            terminal: Terminal::new(input, output),
        }
    }

    /// Ends the conversation and gives back the input and output.
    pub fn into_inner(self) -> (R, W) {
        self.terminal.into_inner()
    }

    /// Writes `prompt`, reads one line and returns it trimmed.
    pub(crate) fn read_answer(&mut self, prompt: &str) -> Result<String, InteractError> {
        tracing::trace!(%prompt, "asking");
        self.terminal.write(prompt.as_bytes())?;
        let line = self.terminal.read_line()?;
        Ok(line.trim().to_string())
    }
}

impl Actor<Stdin, Stdout> {
    /// An actor talking over the process' standard input and output.
    pub fn stdio() -> Self {
        Actor::new(io::stdin(), io::stdout())
    }
}
