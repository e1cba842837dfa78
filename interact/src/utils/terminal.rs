//! # Terminal Line Adapter
//!
//! [`Terminal`] pairs a byte input source with a byte output sink. It reads
//! whole lines from the input and writes raw bytes to the output.
//!
//! It is the lowest layer of an [`Actor`](crate::Actor) and knows nothing about
//! prompts, checks or answers:
//! - [`Terminal::read_line`] blocks until a full `\n` terminated line is available
//!   and returns it without the newline.
//! - [`Terminal::write`] forwards bytes as they are and flushes, so the text is
//!   visible before the next read.
//! - Errors, end of input included, are returned as-is and never retried.
//!
//! ## Example
//! ```rust
//! use std::io::Cursor;
//! use interact::utils::Terminal;
//!
//! let mut terminal = Terminal::new(Cursor::new("first line\n"), Vec::new());
//!
//! terminal.write(b"> ").unwrap();
//! assert_eq!(terminal.read_line().unwrap(), "first line");
//! assert!(terminal.read_line().is_err()); // no more input
//!
//! let (_, output) = terminal.into_inner();
//! assert_eq!(output, b"> ");
//! ```
use std::io::{self, BufRead, BufReader, Read, Write};

/// Line-buffered reader plus raw writer.
pub struct Terminal<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl<R: Read, W: Write> Terminal<R, W> {
    /// Wraps `input` in a line buffer. Nothing is read or written yet.
    pub fn new(input: R, output: W) -> Self {
        Terminal {
            reader: BufReader::new(input),
            writer: output,
        }
    }

    /// Reads one line and strips the trailing newline.
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] when the input is exhausted,
    /// including a last line that never got its `\n`.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;

        if n == 0 || !line.ends_with('\n') {
            tracing::trace!(partial_len = line.len(), "input exhausted");
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a full line was read",
            ));
        }
        line.pop();

        Ok(line)
    }

    /// Writes `bytes` unmodified and flushes the sink.
    pub fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()
    }

    /// Gives back the input source and output sink.
    ///
    /// Input already pulled into the line buffer but not yet read is lost.
    pub fn into_inner(self) -> (R, W) {
        (self.reader.into_inner(), self.writer)
    }
}
