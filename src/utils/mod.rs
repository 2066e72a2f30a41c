//! Shared string and file helpers

pub mod helpers;

pub use helpers::*;
