//! End-of-session results formatting.

pub mod console;
pub mod json;
