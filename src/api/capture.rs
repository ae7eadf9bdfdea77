use thiserror::Error;

/// Reasons a flag may refuse to record a match.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvalidCapture {
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        token: String,
        type_name: &'static str,
    },
    #[error("no value provided.")]
    MissingValue,
}
