//! # Input Checks & Validation
//!
//! This module defines what an input check is ([`InputCheck`]) and how a list
//! of them is applied to an answer ([`run_checks`]). It also ships a set of
//! ready-made checks ([`Sanitize`]).
//!
//! Checks always receive the already trimmed answer. They run in the order
//! given and the first failure stops the pipeline, so later checks never see
//! an answer an earlier one rejected.
//!
//! ## Writing checks
//! Any `Fn(&str) -> Result<(), E>` where `E: Display` is a check. The error's
//! `Display` output is what the operator gets to read.
//!
//! ```rust
//! use interact::utils::{run_checks, DesiredType, InputCheck, Sanitize};
//!
//! fn not_negative(input: &str) -> Result<(), String> {
//!     let n: i64 = input.parse().map_err(|e| format!("{e}"))?;
//!     if n < 0 {
//!         return Err("The number can not be negative!".to_string());
//!     }
//!     Ok(())
//! }
//!
//! let checks: [&dyn InputCheck; 3] = [
//!     &Sanitize::NotEmpty,
//!     &Sanitize::IsType(DesiredType::I64),
//!     &not_negative,
//! ];
//!
//! assert!(run_checks("5", &checks).is_ok());
//! assert_eq!(
//!     run_checks("-2", &checks).unwrap_err(),
//!     "The number can not be negative!"
//! );
//! assert_eq!(run_checks("", &checks).unwrap_err(), "Input should not be empty!");
//! ```
use std::fmt::Display;

/// A single validation rule for a trimmed answer.
///
/// Returns `Ok(())` when the answer is acceptable, or the message explaining
/// why it is not. Checks are expected to be free of side effects.
pub trait InputCheck {
    fn check(&self, input: &str) -> Result<(), String>;
}

impl<F, E> InputCheck for F
where
    F: Fn(&str) -> Result<(), E>,
    E: Display,
{
    fn check(&self, input: &str) -> Result<(), String> {
        self(input).map_err(|e| e.to_string())
    }
}

/// Applies `checks` to `input` in order.
///
/// Returns the message of the first failing check. An empty list always passes.
pub fn run_checks(input: &str, checks: &[&dyn InputCheck]) -> Result<(), String> {
    for (index, check) in checks.iter().enumerate() {
        if let Err(message) = check.check(input) {
            tracing::debug!(check = index, %message, "input rejected");
            return Err(message);
        }
    }
    Ok(())
}

/// Ready-made checks for common answers.
///
/// - `NotEmpty`: the answer must not be empty.
/// - `MatchString`: the answer must be exactly this string.
/// - `MatchStrings`: the answer must be one of these options.
/// - `IsType`: the answer must parse into a [`DesiredType`].
/// - `IsBetween`: the answer must be an integer within `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitize {
    NotEmpty,
    MatchString(String),
    MatchStrings(Vec<String>),
    IsType(DesiredType),
    IsBetween(isize, isize),
}

/// Why a [`Sanitize`] check rejected an answer.
#[derive(Debug, PartialEq)]
pub(crate) enum FilterErrorNot {
    Empty,
    Type(DesiredType),
    MatchString(String),
    MatchStrings(Vec<String>),
    Between(isize, isize),
}

impl Display for FilterErrorNot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Input should not be empty!"),
            Self::Type(t) => write!(f, "The value is not a {}!", t),
            Self::MatchString(s) => write!(f, "The value doesn't match with {}!", s),
            Self::MatchStrings(v) => write!(
                f,
                "The value doesn't match with the options: {}!",
                v.join(", ")
            ),
            Self::Between(n1, n2) => write!(f, "The value is not between {} and {}!", n1, n2),
        }
    }
}

impl Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            Sanitize::NotEmpty => {
                if input.is_empty() {
                    Err(FilterErrorNot::Empty)
                } else {
                    Ok(())
                }
            }
            Sanitize::MatchString(s) => {
                if input == s {
                    Ok(())
                } else {
                    Err(FilterErrorNot::MatchString(s.clone()))
                }
            }
            Sanitize::MatchStrings(options) => {
                if options.iter().any(|option| option == input) {
                    Ok(())
                } else {
                    Err(FilterErrorNot::MatchStrings(options.clone()))
                }
            }
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::IsBetween(n1, n2) => {
                let n: isize = input
                    .parse()
                    .map_err(|_| FilterErrorNot::Type(DesiredType::Isize))?;
                if (*n1..=*n2).contains(&n) {
                    Ok(())
                } else {
                    Err(FilterErrorNot::Between(*n1, *n2))
                }
            }
        }
    }
}

impl InputCheck for Sanitize {
    fn check(&self, input: &str) -> Result<(), String> {
        self.validate(input).map_err(|e| e.to_string())
    }
}

/// The primitive an answer should parse into, used with [`Sanitize::IsType`].
///
/// `String` accepts any answer. The rest follow Rust's own `FromStr` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    String,
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
}

/// Expands to `Ok(())` if `$input` parses as `$t`, otherwise `Err($err)`.
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(_) => Ok(()),
            Err(_) => Err($err),
        }
    };
}

impl DesiredType {
    fn parse(&self, input: &str) -> Result<(), FilterErrorNot> {
        let mismatch = FilterErrorNot::Type(*self);
        match self {
            DesiredType::String => Ok(()),
            DesiredType::Bool => check_type!(input, bool, mismatch),
            DesiredType::U8 => check_type!(input, u8, mismatch),
            DesiredType::U16 => check_type!(input, u16, mismatch),
            DesiredType::U32 => check_type!(input, u32, mismatch),
            DesiredType::U64 => check_type!(input, u64, mismatch),
            DesiredType::U128 => check_type!(input, u128, mismatch),
            DesiredType::I8 => check_type!(input, i8, mismatch),
            DesiredType::I16 => check_type!(input, i16, mismatch),
            DesiredType::I32 => check_type!(input, i32, mismatch),
            DesiredType::I64 => check_type!(input, i64, mismatch),
            DesiredType::I128 => check_type!(input, i128, mismatch),
            DesiredType::Isize => check_type!(input, isize, mismatch),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::U128 => write!(f, "u128"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::I128 => write!(f, "i128"),
            Self::Isize => write!(f, "isize"),
        }
    }
}
