//! Foundation types: geometry values and the time source.

pub mod clock;
pub mod types;
