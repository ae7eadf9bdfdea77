use std::env;

use crate::api::{Flag, InvalidCapture};
use crate::model::ErrorKind;
use crate::parser::base::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const MARKER: char = '-';

/// A set of flags parsed out of one argument list.
///
/// Flags are written as `-name`, followed by a value token for string and integer flags.
/// Flags and positional arguments may be interleaved freely; every token that is not a flag or a flag value is kept, in order, as a leftover.
///
/// ### Example
/// ```
/// use plainflag::FlagSet;
///
/// let mut name = String::default();
/// let mut count: i64 = 0;
/// let mut verbose = false;
/// let mut flags = FlagSet::new(["greet", "-name", "world", "extra", "-v"]);
/// flags
///     .string(&mut name, "name", "nobody")
///     .int(&mut count, "count", 1)
///     .boolean(&mut verbose, "v");
///
/// flags.parse().unwrap();
/// let leftovers = flags.into_args();
///
/// assert_eq!(name, "world");
/// assert_eq!(count, 1);
/// assert!(verbose);
/// assert_eq!(leftovers, vec!["greet", "extra"]);
/// ```
#[derive(Debug)]
pub struct FlagSet<'a> {
    args: Vec<String>,
    flags: Vec<Flag<'a>>,
    leftovers: Vec<String>,
    parsed: bool,
}

impl<'a> FlagSet<'a> {
    /// Create a flag set over the argument list.
    ///
    /// The list is taken as is: include the program name when it should show up among the leftovers.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            args: args.into_iter().map(|arg| arg.as_ref().to_string()).collect(),
            flags: Vec::default(),
            leftovers: Vec::default(),
            parsed: false,
        }
    }

    /// Create a flag set over the process arguments ([`env::args`]), program name included.
    pub fn from_env() -> Self {
        Self::new(env::args())
    }

    /// Register a string flag `-name VALUE`.
    ///
    /// The value token is taken verbatim, even when it starts with `-`.
    /// `variable` receives `default` when the flag is absent.
    pub fn string(
        &mut self,
        variable: &'a mut String,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> &mut Self {
        self.flags.push(Flag::text(variable, name, default));
        self
    }

    /// Register an integer flag `-name VALUE`.
    ///
    /// The value token must parse as a base-10 `i64`.
    /// `variable` receives `default` when the flag is absent.
    pub fn int(&mut self, variable: &'a mut i64, name: impl Into<String>, default: i64) -> &mut Self {
        self.flags.push(Flag::integer(variable, name, default));
        self
    }

    /// Register a boolean flag `-name`.
    ///
    /// The flag never takes a value: `variable` is `true` when the flag is present and `false` otherwise.
    pub fn boolean(&mut self, variable: &'a mut bool, name: impl Into<String>) -> &mut Self {
        self.flags.push(Flag::switch(variable, name));
        self
    }

    /// Parse the argument list, writing into the registered variables.
    ///
    /// Parsing stops at the first error.
    /// Variables written before the error keep their values; defaults are only applied once the whole list has been scanned.
    /// When a name is registered more than once, the first registration wins.
    ///
    /// A flag set parses successfully once: any later call returns [`ErrorKind::AlreadyParsed`] and leaves everything untouched.
    /// A failed parse may be retried, which scans the whole argument list again.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        if self.parsed {
            return Err(ParseError::new("", ErrorKind::AlreadyParsed));
        }

        let result = self.scan();

        match &result {
            Ok(()) => self.parsed = true,
            Err(_error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parse failed: {_error}.");
                }
            }
        }

        result
    }

    fn scan(&mut self) -> Result<(), ParseError> {
        let FlagSet {
            args,
            flags,
            leftovers,
            ..
        } = self;
        leftovers.clear();
        flags.iter_mut().for_each(Flag::reset);
        let mut tokens = args.iter();

        while let Some(token) = tokens.next() {
            let name = match token.strip_prefix(MARKER) {
                Some(name) => name,
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Leftover '{token}'.");
                    }

                    leftovers.push(token.clone());
                    continue;
                }
            };

            if name.starts_with(MARKER) {
                return Err(ParseError::new(token, ErrorKind::DoubleMarker));
            }

            let flag = flags
                .iter_mut()
                .find(|flag| flag.name() == name)
                .ok_or_else(|| ParseError::new(token, ErrorKind::UnknownFlag))?;

            let value = if flag.wants_value() {
                tokens.next()
            } else {
                None
            };
            flag.set(value.map(String::as_str))
                .map_err(|error| match error {
                    InvalidCapture::MissingValue => {
                        ParseError::new(token, ErrorKind::MissingValue)
                    }
                    InvalidCapture::InvalidConversion {
                        token: rejected, ..
                    } => ParseError::invalid_value(token, rejected),
                })?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '{name}' set from {value:?}.");
            }
        }

        for flag in flags.iter_mut().filter(|flag| !flag.received()) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Flag '{}' absent, applying default.", flag.name());
            }

            flag.apply_default();
        }

        Ok(())
    }

    /// The leftover (non-flag) arguments, in their original order.
    ///
    /// Empty until [`FlagSet::parse`] runs.
    /// After a failed parse, holds the leftovers that attempt saw before the error.
    pub fn args(&self) -> &[String] {
        &self.leftovers
    }

    /// Consume the flag set, returning the leftover arguments.
    ///
    /// This also ends the borrows on the registered variables.
    pub fn into_args(self) -> Vec<String> {
        self.leftovers
    }

    /// Whether [`FlagSet::parse`] has succeeded.
    pub fn parsed(&self) -> bool {
        self.parsed
    }
}
