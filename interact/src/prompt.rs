//! # Prompts
//!
//! Free-text questions answered with a single line.
//!
//! - [`Actor::prompt`] renders `"<message>: "` and validates the trimmed answer.
//! - [`Actor::prompt_optional`] renders `"<message>: (<default>) "` and returns
//!   the default when the operator just presses enter. The default is trusted
//!   and never goes through the checks.
//! - The `*_and_retry` variants catch any failure, show it, and ask
//!   `Do you want to try again? [y/N]`. A `y` asks the question again from
//!   scratch, anything that resolves to no ends with [`InteractError::Canceled`].
//!
//! ## Example
//! ```rust
//! use std::io::Cursor;
//! use interact::Actor;
//! use interact::utils::Sanitize;
//!
//! fn not_negative(input: &str) -> Result<(), String> {
//!     match input.parse::<i64>() {
//!         Ok(n) if n < 0 => Err("The number can not be negative!".to_string()),
//!         Ok(_) => Ok(()),
//!         Err(e) => Err(e.to_string()),
//!     }
//! }
//!
//! let mut actor = Actor::new(Cursor::new("-2\ny\n5\n"), Vec::new());
//!
//! let answer = actor
//!     .prompt_and_retry("Please enter a positive number", &[&Sanitize::NotEmpty, &not_negative])
//!     .unwrap();
//! assert_eq!(answer, "5");
//!
//! let (_, output) = actor.into_inner();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Please enter a positive number: \
//!      The number can not be negative!\n\
//!      Do you want to try again? [y/N]: \
//!      Please enter a positive number: "
//! );
//! ```
use crate::utils::{InputCheck, run_checks};
use crate::{Actor, ConfirmDefault, InteractError};
use std::io::{Read, Write};

impl<R: Read, W: Write> Actor<R, W> {
    /// Asks for a line of input and validates it.
    ///
    /// Returns the trimmed answer if every check passes. Otherwise returns the
    /// first check's message as [`InteractError::Validation`].
    pub fn prompt(
        &mut self,
        message: &str,
        checks: &[&dyn InputCheck],
    ) -> Result<String, InteractError> {
        let input = self.read_answer(&format!("{}: ", message))?;
        validate(input, checks)
    }

    /// Like [`Actor::prompt`], but an empty answer selects `default`.
    ///
    /// The default is returned as-is without running `checks`.
    pub fn prompt_optional(
        &mut self,
        message: &str,
        default: &str,
        checks: &[&dyn InputCheck],
    ) -> Result<String, InteractError> {
        let input = self.read_answer(&format!("{}: ({}) ", message, default))?;
        if input.is_empty() {
            tracing::debug!(%default, "empty answer, using default");
            return Ok(default.to_string());
        }
        validate(input, checks)
    }

    /// [`Actor::prompt`] that offers another attempt after every failure.
    ///
    /// Returns [`InteractError::Canceled`] once the operator declines to retry.
    pub fn prompt_and_retry(
        &mut self,
        message: &str,
        checks: &[&dyn InputCheck],
    ) -> Result<String, InteractError> {
        loop {
            match self.prompt(message, checks) {
                Ok(input) => return Ok(input),
                Err(err) => self.confirm_retry(err)?,
            }
        }
    }

    /// [`Actor::prompt_optional`] that offers another attempt after every failure.
    ///
    /// Returns [`InteractError::Canceled`] once the operator declines to retry.
    pub fn prompt_optional_and_retry(
        &mut self,
        message: &str,
        default: &str,
        checks: &[&dyn InputCheck],
    ) -> Result<String, InteractError> {
        loop {
            match self.prompt_optional(message, default, checks) {
                Ok(input) => return Ok(input),
                Err(err) => self.confirm_retry(err)?,
            }
        }
    }

    /// Shows `err` and asks whether to try again.
    ///
    /// `Ok(())` means retry. Declining yields [`InteractError::Canceled`]. A
    /// stream failure while asking is returned unchanged.
    fn confirm_retry(&mut self, err: InteractError) -> Result<(), InteractError> {
        let question = format!("{}\nDo you want to try again?", err);
        if self.confirm(&question, ConfirmDefault::DefaultNo)? {
            tracing::debug!("operator retrying");
            Ok(())
        } else {
            tracing::debug!("operator canceled");
            Err(InteractError::Canceled)
        }
    }
}

fn validate(input: String, checks: &[&dyn InputCheck]) -> Result<String, InteractError> {
    run_checks(&input, checks).map_err(InteractError::Validation)?;
    Ok(input)
}
