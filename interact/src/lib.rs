//! # Interact
//!
//! A small Rust library for CLI tools that need to stop and ask the operator
//! something: validated prompts, default values, retry loops and yes/no
//! confirmations over any [`std::io::Read`] / [`std::io::Write`] pair.
//!
//! ## Features
//!
//! - **Prompts** - Ask for a line of input and run it through ordered checks
//! - **Defaults** - Let the operator press enter to accept a suggested value
//! - **Retry loops** - Show what was wrong and offer another attempt
//! - **Confirmations** - Strict `y`/`n` questions with a configurable default
//! - **Ready-made checks** - Type, range and option validation via [`utils::Sanitize`]
//!
//! ## Cargo features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`ConfirmDefault`], for applications
//!   that keep their default answer in a config file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use interact::{Actor, ConfirmDefault};
//! use interact::utils::{DesiredType, Sanitize};
//!
//! let mut actor = Actor::stdio();
//!
//! let threads = actor
//!     .prompt_optional_and_retry("Worker threads", "4", &[&Sanitize::IsBetween(1, 16)])
//!     .unwrap();
//!
//! let mode = actor
//!     .prompt_and_retry(
//!         "Choose a mode (quick/deep)",
//!         &[
//!             &Sanitize::IsType(DesiredType::String),
//!             &Sanitize::MatchStrings(vec!["quick".to_string(), "deep".to_string()]),
//!         ],
//!     )
//!     .unwrap();
//!
//! if actor.confirm("Start now?", ConfirmDefault::DefaultYes).unwrap() {
//!     println!("Running {} with {} threads", mode, threads);
//! }
//! ```
//!
//! ## Rendered text
//!
//! What the operator sees is fixed, so scripted callers can rely on it:
//!
//! | Operation | Output |
//! |-----------|--------|
//! | `prompt` | `"<message>: "` |
//! | `prompt_optional` | `"<message>: (<default>) "` |
//! | `confirm` | `"<message> [Y/n]: "`, `"<message> [y/N]: "` or `"<message> [y/n]: "` |
//! | unrecognized answer | `"Please select y/n!"` |
//! | retry question | `"<error>\nDo you want to try again?"` |
//!
//! ## Error Handling
//!
//! Everything returns `Result<T, InteractError>`:
//!
//! ```rust
//! use std::io::Cursor;
//! use interact::{Actor, InteractError};
//!
//! let mut actor = Actor::new(Cursor::new("\nn\n"), Vec::new());
//! let not_empty = |input: &str| {
//!     if input.is_empty() { Err("Input should not be empty!") } else { Ok(()) }
//! };
//!
//! match actor.prompt_and_retry("Name", &[&not_empty]) {
//!     Ok(name) => println!("Hello {name}"),
//!     Err(InteractError::Canceled) => eprintln!("Operator gave up"),
//!     Err(InteractError::Io(e)) => eprintln!("Lost the terminal: {e}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Diagnostic events (rejected answers, retries, defaults taken) are emitted
//! through [`tracing`] and never written to the operator's output. Install a
//! subscriber in the application to see them.

pub mod actor;
pub use actor::Actor;

pub mod confirm;
pub use confirm::ConfirmDefault;

pub mod error;
pub use error::InteractError;

pub mod prompt;

pub mod utils;

#[cfg(test)]
mod testing;
