//! Browser Extension Build Helper
//!
//! Prepares a copied extension source tree for one browser target: fills in
//! metadata placeholders, writes the bundled script rules, patches the preload
//! script on pre-release branches and optionally collapses the library into a
//! single API script.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod packager;
pub mod transformer;
pub mod report;
pub mod utils;

pub use error::{BuildError, BuildResult};
pub use models::{Branch, Browser, BuildReport, MetadataParams};
pub use packager::create_api_build;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Main entry point for preparing a build tree
pub fn compile_extension(root: &Path, options: &BuildOptions) -> Result<BuildReport> {
    info!(root = %root.display(), browser = %options.browser, branch = %options.branch, "Compiling extension");
    let mut report = BuildReport::new(options.browser, options.branch.clone(), &options.metadata.version);

    // 1. Substitute metadata placeholders
    let patcher = transformer::MetadataPatcher::new(&options.metadata);
    let patched = patcher
        .patch(root, options.browser)
        .with_context(|| format!("Failed to update {} metadata", options.browser))?;
    report.patched_files.extend(patched);

    // 2. Write bundled script rules
    let written = transformer::write_local_script_rules(root, &options.script_rules)
        .context("Failed to write local script rules")?;
    report.written_files.push(written);
    report.script_rules = options.script_rules.len();

    // 3. Patch preload script for pre-release branches
    if let Some(patched) = transformer::patch_preload_for_branch(root, &options.branch)
        .context("Failed to patch preload script")?
    {
        report.patched_files.push(patched);
    }

    // 4. Collapse the library into the API script
    if options.api_build {
        let summary = create_api_build(root, options.browser).context("Failed to create API build")?;
        report.written_files.push(summary.aggregate.clone());
        report.api_build = Some(summary);
    }

    Ok(report)
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub browser: Browser,
    pub branch: Branch,
    pub metadata: MetadataParams,
    /// Order-preserving; emitted as given.
    pub script_rules: Vec<String>,
    pub api_build: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            browser: Browser::Chromium,
            branch: Branch::default(),
            metadata: MetadataParams::default(),
            script_rules: Vec::new(),
            api_build: false,
        }
    }
}
