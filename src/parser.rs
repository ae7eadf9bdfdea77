mod base;
mod flagset;

pub use base::ParseError;
pub use flagset::FlagSet;
