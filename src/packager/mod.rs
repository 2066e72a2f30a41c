//! API build: one aggregated script in place of the library tree

pub mod assembler;
pub mod cleanup;

pub use assembler::{assemble_api_script, read_entry_scripts, strip_license_comment, EntryScript};
pub use cleanup::{prune_unretained, remove_empty_dirs};

use crate::config::{API_BACKGROUND_PAGE, API_JS_FILE, BACKGROUND_PAGE, LIB_DIR};
use crate::error::BuildResult;
use crate::models::{ApiBuildSummary, Browser, RetainedFileSet};
use crate::parser::{read_entry_page, read_manifest_descriptor};
use crate::utils::write_text;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Replace the library tree under `root` with a single API script.
///
/// Scripts referenced by `background.html` are concatenated into
/// `lib/adguard-api.js`, every file under `lib/` that the manifest does not
/// declare is deleted, empty directories are removed and the background page
/// is rewritten to load only the aggregate. The tree is modified in place and
/// is left as-is if a step fails.
pub fn create_api_build(root: &Path, browser: Browser) -> BuildResult<ApiBuildSummary> {
    info!(root = %root.display(), %browser, "Creating API build");

    let descriptor = read_manifest_descriptor(root)?;
    let retained = RetainedFileSet::from_manifest(root, &descriptor);
    if retained.is_empty() {
        warn!("Manifest declares no script files, every file under lib/ will be deleted");
    }

    let page = read_entry_page(root)?;
    let scripts = read_entry_scripts(root, &page)?;
    let aggregate = assemble_api_script(&scripts);

    let lib_dir = root.join(LIB_DIR);
    let removed_files = prune_unretained(&lib_dir, &retained)?;
    let removed_dirs = remove_empty_dirs(&lib_dir)?;
    info!(
        files = removed_files.len(),
        dirs = removed_dirs.len(),
        "Pruned library tree"
    );

    write_text(&root.join(BACKGROUND_PAGE), API_BACKGROUND_PAGE)?;
    write_text(&root.join(API_JS_FILE), &aggregate)?;

    Ok(ApiBuildSummary {
        aggregate: PathBuf::from(API_JS_FILE),
        aggregated_scripts: relative_to(root, scripts.into_iter().map(|s| s.path)),
        retained_files: retained.len(),
        removed_files: relative_to(root, removed_files),
        removed_dirs: relative_to(root, removed_dirs),
    })
}

fn relative_to(root: &Path, paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .map(|p| p.strip_prefix(root).map(Path::to_path_buf).unwrap_or(p))
        .collect()
}
