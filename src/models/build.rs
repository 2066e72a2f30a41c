//! Per-invocation build data

use super::{Branch, Browser};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Relative paths declared by `manifest.json`, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDescriptor {
    pub paths: Vec<String>,
}

/// Script sources referenced by the background page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPage {
    pub sources: Vec<String>,
}

/// Files that survive pruning of the library tree.
///
/// Membership is decided by the resolved path only.
#[derive(Debug, Clone, Default)]
pub struct RetainedFileSet {
    paths: HashSet<PathBuf>,
}

impl RetainedFileSet {
    pub fn from_manifest(root: &Path, descriptor: &ManifestDescriptor) -> Self {
        let paths = descriptor.paths.iter().map(|p| root.join(p)).collect();
        Self { paths }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Values substituted into the per-browser metadata files.
#[derive(Debug, Clone, Default)]
pub struct MetadataParams {
    pub version: String,
    pub extension_id: Option<String>,
    pub update_url: Option<String>,
    pub extension_name_postfix: Option<String>,
}

/// What the API build did to the tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiBuildSummary {
    pub aggregate: PathBuf,
    pub aggregated_scripts: Vec<PathBuf>,
    pub retained_files: usize,
    pub removed_files: Vec<PathBuf>,
    pub removed_dirs: Vec<PathBuf>,
}

/// Everything a build pipeline run touched, relative to the build root.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub browser: Browser,
    pub branch: Branch,
    pub version: String,
    pub patched_files: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    pub script_rules: usize,
    pub api_build: Option<ApiBuildSummary>,
}

impl BuildReport {
    pub fn new(browser: Browser, branch: Branch, version: impl Into<String>) -> Self {
        Self {
            browser,
            branch,
            version: version.into(),
            patched_files: Vec::new(),
            written_files: Vec::new(),
            script_rules: 0,
            api_build: None,
        }
    }
}
