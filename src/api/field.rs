use std::str::FromStr;

use crate::api::capture::*;

/// The caller-owned variable a flag writes into, alongside its default.
#[derive(Debug)]
pub(crate) enum Destination<'a> {
    /// A string flag: any token is taken verbatim.
    Text {
        variable: &'a mut String,
        default: String,
    },
    /// An integer flag: the token must parse as a base-10 `i64`.
    Integer { variable: &'a mut i64, default: i64 },
    /// A boolean flag: takes no token, its default is always `false`.
    Switch { variable: &'a mut bool },
}

/// A registered flag definition.
#[derive(Debug)]
pub(crate) struct Flag<'a> {
    name: String,
    destination: Destination<'a>,
    received: bool,
}

impl<'a> Flag<'a> {
    pub(crate) fn text(
        variable: &'a mut String,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            Destination::Text {
                variable,
                default: default.into(),
            },
        )
    }

    pub(crate) fn integer(variable: &'a mut i64, name: impl Into<String>, default: i64) -> Self {
        Self::new(name, Destination::Integer { variable, default })
    }

    pub(crate) fn switch(variable: &'a mut bool, name: impl Into<String>) -> Self {
        Self::new(name, Destination::Switch { variable })
    }

    fn new(name: impl Into<String>, destination: Destination<'a>) -> Self {
        Self {
            name: name.into(),
            destination,
            received: false,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Whether matching this flag also consumes the following token.
    pub(crate) fn wants_value(&self) -> bool {
        match self.destination {
            Destination::Text { .. } | Destination::Integer { .. } => true,
            Destination::Switch { .. } => false,
        }
    }

    /// Whether this flag was matched during the scan.
    pub(crate) fn received(&self) -> bool {
        self.received
    }

    /// Forget that the flag was matched, ahead of a fresh scan.
    pub(crate) fn reset(&mut self) {
        self.received = false;
    }

    /// Record a match of this flag, along with the following token when [`Flag::wants_value`].
    ///
    /// The destination is left untouched when the value is missing or does not convert.
    /// A switch ignores the value altogether.
    pub(crate) fn set(&mut self, value: Option<&str>) -> Result<(), InvalidCapture> {
        match &mut self.destination {
            Destination::Text { variable, .. } => {
                **variable = value.ok_or(InvalidCapture::MissingValue)?.to_string();
            }
            Destination::Integer { variable, .. } => {
                **variable = convert::<i64>(value.ok_or(InvalidCapture::MissingValue)?)?;
            }
            Destination::Switch { variable } => {
                **variable = true;
            }
        }

        self.received = true;
        Ok(())
    }

    /// Write the default into the destination.
    pub(crate) fn apply_default(&mut self) {
        match &mut self.destination {
            Destination::Text { variable, default } => {
                **variable = default.clone();
            }
            Destination::Integer { variable, default } => {
                **variable = *default;
            }
            Destination::Switch { variable } => {
                **variable = false;
            }
        }
    }
}

fn convert<T: FromStr>(token: &str) -> Result<T, InvalidCapture> {
    T::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}
