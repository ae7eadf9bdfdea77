use thiserror::Error;

use crate::model::ErrorKind;

/// The single error a failed [`FlagSet::parse`](crate::FlagSet::parse) reports.
///
/// ### Example
/// ```
/// use plainflag::{ErrorKind, FlagSet, ParseError};
///
/// let mut count: i64 = 0;
/// let mut flags = FlagSet::new(["program", "-count", "many"]);
/// flags.int(&mut count, "count", 1);
///
/// let error = flags.parse().unwrap_err();
/// assert_eq!(
///     error,
///     ParseError {
///         arg: "-count".to_string(),
///         kind: ErrorKind::InvalidValue,
///         value: "many".to_string(),
///     }
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Err:{kind}\tFlag:{arg}\tValue:{value}")]
pub struct ParseError {
    /// The offending token, marker included (empty for [`ErrorKind::AlreadyParsed`]).
    pub arg: String,
    /// What went wrong.
    pub kind: ErrorKind,
    /// The offending value token (empty unless [`ErrorKind::InvalidValue`]).
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(arg: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            arg: arg.into(),
            kind,
            value: String::default(),
        }
    }

    pub(crate) fn invalid_value(arg: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            arg: arg.into(),
            kind: ErrorKind::InvalidValue,
            value: value.into(),
        }
    }
}
