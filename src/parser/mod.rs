//! Parsing modules for the manifest and the background page

pub mod manifest;
pub mod entry_page;

pub use manifest::{parse_manifest_descriptor, read_manifest_descriptor};
pub use entry_page::{parse_entry_page, read_entry_page};
