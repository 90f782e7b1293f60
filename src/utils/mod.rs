//! Shared utilities.

pub mod encoding;

pub use encoding::{encode_output, read_input};
