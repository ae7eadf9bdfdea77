mod capture;
mod field;

pub(crate) use capture::InvalidCapture;
pub(crate) use field::*;
