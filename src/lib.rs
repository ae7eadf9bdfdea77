//! `plainflag` is a small command line flag parser for Rust.
//!
//! Richer parsers handle long options, help output and sub-commands.
//! `plainflag` trades all of that away for a surface small enough to specify completely:
//! * *Single-hyphen flags only*:
//! Flags are written `-name`.
//! There are no `--long` flags, no `-name=value` joined values, and no flag grouping.
//! * *Three value types*:
//! String and integer flags take the following token as their value; boolean flags never take a value.
//! * *Order independence*:
//! Flags and positional arguments may be interleaved in any order.
//! Every token that is not a flag or a flag value is kept, in its original order, as a leftover.
//! * *The raw argument list*:
//! Give the process arguments as they are, program name included.
//! The program name simply comes back as the first leftover.
//! * *Structured errors*:
//! Parsing stops at the first problem and returns a single [`ParseError`].
//! `plainflag` never prints anything; reporting is up to the caller.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greet.rs")]
//! ```
//!
//! ```console
//! $ greet -name world -times 2 extra
//! hello world
//! hello world
//! leftovers: ["greet", "extra"]
//!
//! $ greet -times many
//! Err:Invalid value	Flag:-times	Value:many
//! ```
//!
//! # Flags
//! Register flags on a [`FlagSet`] against variables you own, then parse once.
//! The flag set holds the `&mut` borrows until it is dropped (or consumed via [`FlagSet::into_args`]).
//!
//! ```text
//! Method     | Variable   | Syntax         | When absent
//! --------------------------------------------------------
//! string     | String     | -name VALUE    | the registered default
//! int        | i64        | -name VALUE    | the registered default
//! boolean    | bool       | -name          | false
//! ```
//!
//! # Errors
//! A failed parse reports exactly one [`ErrorKind`]:
//! * [`ErrorKind::DoubleMarker`]: a token starts with `--`.
//! * [`ErrorKind::UnknownFlag`]: a `-name` token matches no registered flag.
//! * [`ErrorKind::MissingValue`]: a string/integer flag is the final token.
//! * [`ErrorKind::InvalidValue`]: an integer flag's value does not parse.
//! * [`ErrorKind::AlreadyParsed`]: [`FlagSet::parse`] was called a second time.
//!
//! Variables written before the error keep their values; nothing is rolled back.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while parsing.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;

pub use model::ErrorKind;
pub use parser::{FlagSet, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
