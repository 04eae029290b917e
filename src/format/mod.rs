//! Human-readable formatting of profile values.

pub mod values;

pub use values::{format_duration, format_scalar, format_values};
