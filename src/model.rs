/// The kind of failure reported by [`FlagSet::parse`](crate::FlagSet::parse).
///
/// Exactly one kind is reported per failed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `parse` was invoked a second time on the same `FlagSet`.
    AlreadyParsed,
    /// A token starts with `--`.
    DoubleMarker,
    /// A `-name` token matches no registered flag.
    UnknownFlag,
    /// A string/integer flag is the final token, so it has no value.
    MissingValue,
    /// An integer flag's value is not a base-10 integer.
    InvalidValue,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ErrorKind::AlreadyParsed => "Already parsed",
            ErrorKind::DoubleMarker => "Double hyphen",
            ErrorKind::UnknownFlag => "Unknown flag",
            ErrorKind::MissingValue => "Missing value",
            ErrorKind::InvalidValue => "Invalid value",
        };
        write!(f, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::AlreadyParsed, "Already parsed")]
    #[case(ErrorKind::DoubleMarker, "Double hyphen")]
    #[case(ErrorKind::UnknownFlag, "Unknown flag")]
    #[case(ErrorKind::MissingValue, "Missing value")]
    #[case(ErrorKind::InvalidValue, "Invalid value")]
    fn display(#[case] kind: ErrorKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
