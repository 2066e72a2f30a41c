//! Core data models for extension builds

pub mod browser;
pub mod build;

pub use browser::*;
pub use build::*;
