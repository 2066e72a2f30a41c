//! Source-tree patches applied per browser and branch

pub mod metadata;
pub mod preload;
pub mod script_rules;

pub use metadata::MetadataPatcher;
pub use preload::{patch_preload_content, patch_preload_for_branch};
pub use script_rules::{load_script_rules, render_script_rules, write_local_script_rules};
