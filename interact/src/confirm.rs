//! # Yes/No Confirmation
//!
//! [`Actor::confirm`] asks a question that can only be answered with `y` or
//! `n`. The [`ConfirmDefault`] decides what pressing enter means and which
//! hint is shown next to the question.
//!
//! Anything else (`Y` and `yes` included) prints `Please select y/n!` and asks
//! again until a usable answer arrives or the input fails.
//!
//! ```rust
//! use std::io::Cursor;
//! use interact::{Actor, ConfirmDefault};
//!
//! let mut actor = Actor::new(Cursor::new("yes\ny\n"), Vec::new());
//!
//! assert!(actor.confirm("Delete the cache?", ConfirmDefault::DefaultNo).unwrap());
//!
//! let (_, output) = actor.into_inner();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Delete the cache? [y/N]: Please select y/n!\nDelete the cache? [y/N]: "
//! );
//! ```
use crate::{Actor, InteractError};
use std::fmt::Display;
use std::io::{Read, Write};

/// Printed whenever a confirmation answer is neither `y` nor `n`.
pub const UNRECOGNIZED_ANSWER: &str = "Please select y/n!";

/// What an empty answer to [`Actor::confirm`] stands for.
///
/// - `DefaultYes`: empty means yes, shown as `[Y/n]`.
/// - `DefaultNo`: empty means no, shown as `[y/N]`.
/// - `NoDefault`: empty is not an answer, shown as `[y/n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConfirmDefault {
    DefaultYes,
    DefaultNo,
    NoDefault,
}

impl ConfirmDefault {
    /// The hint rendered after the question.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DefaultYes => "[Y/n]",
            Self::DefaultNo => "[y/N]",
            Self::NoDefault => "[y/n]",
        }
    }

    /// Interprets a trimmed answer. `None` means the answer is not recognized.
    pub fn resolve(&self, answer: &str) -> Option<bool> {
        match (answer, self) {
            ("y", _) | ("", Self::DefaultYes) => Some(true),
            ("n", _) | ("", Self::DefaultNo) => Some(false),
            _ => None,
        }
    }
}

impl Display for ConfirmDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl<R: Read, W: Write> Actor<R, W> {
    /// Asks `message` as a yes/no question and returns the answer.
    ///
    /// Renders `"<message> [Y/n]: "` (or `[y/N]`, `[y/n]` per `default`) and keeps
    /// asking until the answer is recognized. Only a stream error ends it early.
    pub fn confirm(
        &mut self,
        message: &str,
        default: ConfirmDefault,
    ) -> Result<bool, InteractError> {
        loop {
            let answer = self.read_answer(&format!("{} {}: ", message, default.label()))?;

            match default.resolve(&answer) {
                Some(confirmed) => return Ok(confirmed),
                None => {
                    tracing::debug!(
                        answer_len = answer.len(),
                        ?default,
                        "unrecognized confirmation answer"
                    );
                    self.terminal
                        .write(format!("{}\n", UNRECOGNIZED_ANSWER).as_bytes())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::capture_logs;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(input: &str, default: ConfirmDefault) -> (Result<bool, InteractError>, String) {
        let mut actor = Actor::new(Cursor::new(input.to_string()), Vec::new());
        let res = actor.confirm("Are you sure?", default);
        let (_, output) = actor.into_inner();
        (res, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConfirmDefault::DefaultYes.label(), "[Y/n]");
        assert_eq!(ConfirmDefault::DefaultNo.label(), "[y/N]");
        assert_eq!(ConfirmDefault::NoDefault.to_string(), "[y/n]");
    }

    #[test]
    fn test_resolve() {
        use ConfirmDefault::*;

        for default in [DefaultYes, DefaultNo, NoDefault] {
            assert_eq!(default.resolve("y"), Some(true));
            assert_eq!(default.resolve("n"), Some(false));
            assert_eq!(default.resolve("Y"), None);
            assert_eq!(default.resolve("N"), None);
            assert_eq!(default.resolve("yes"), None);
        }
        assert_eq!(DefaultYes.resolve(""), Some(true));
        assert_eq!(DefaultNo.resolve(""), Some(false));
        assert_eq!(NoDefault.resolve(""), None);
    }

    #[test]
    fn test_confirm_default_yes_on_empty() {
        let (res, output) = run("\n", ConfirmDefault::DefaultYes);
        assert!(res.unwrap());
        assert_eq!(output, "Are you sure? [Y/n]: ");
    }

    #[test]
    fn test_confirm_default_no_on_empty() {
        let (res, output) = run("\n", ConfirmDefault::DefaultNo);
        assert!(!res.unwrap());
        assert_eq!(output, "Are you sure? [y/N]: ");
    }

    #[test]
    fn test_confirm_no_default_reprompts_on_empty() {
        let (res, output) = run("\ny\n", ConfirmDefault::NoDefault);
        assert!(res.unwrap());
        assert_eq!(
            output,
            "Are you sure? [y/n]: Please select y/n!\nAre you sure? [y/n]: "
        );
    }

    #[test]
    fn test_confirm_explicit_answers_override_default() {
        let (res, _) = run("n\n", ConfirmDefault::DefaultYes);
        assert!(!res.unwrap());

        let (res, _) = run("y\n", ConfirmDefault::DefaultNo);
        assert!(res.unwrap());
    }

    #[test]
    fn test_confirm_trims_answer() {
        let (res, _) = run("   y \t\n", ConfirmDefault::NoDefault);
        assert!(res.unwrap());

        let (res, _) = run("  \n", ConfirmDefault::DefaultYes);
        assert!(res.unwrap());
    }

    #[test]
    fn test_confirm_reprompts_once_per_unrecognized_answer() {
        let (res, output) = run("Y\nyes\nasdf\nn\n", ConfirmDefault::DefaultYes);
        assert!(!res.unwrap());
        assert_eq!(
            output,
            "Are you sure? [Y/n]: Please select y/n!\n\
             Are you sure? [Y/n]: Please select y/n!\n\
             Are you sure? [Y/n]: Please select y/n!\n\
             Are you sure? [Y/n]: "
        );
    }

    #[test]
    fn test_confirm_read_error_stops_loop() {
        let (res, output) = run("maybe\n", ConfirmDefault::NoDefault);
        let err = res.unwrap_err();
        assert!(err.is_eof());
        assert_eq!(
            output,
            "Are you sure? [y/n]: Please select y/n!\nAre you sure? [y/n]: "
        );
    }

    #[test]
    fn test_confirm_eof_without_newline() {
        let (res, _) = run("y", ConfirmDefault::DefaultYes);
        assert!(res.unwrap_err().is_eof());
    }

    #[test]
    fn test_unrecognized_answer_is_not_logged() {
        let logs = capture_logs(|| {
            let (res, _) = run("secret-word\ny\n", ConfirmDefault::NoDefault);
            assert!(res.unwrap());
        });
        assert!(logs.contains("unrecognized confirmation answer"));
        assert!(logs.contains("answer_len=11"));
        assert!(!logs.contains("secret-word"));
    }
}
