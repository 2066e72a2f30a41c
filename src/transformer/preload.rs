//! Preload script patch enabling remote JS rules in Firefox
//!
//! AMO forbids remote scripts, so release builds only run the bundled default
//! script rules in Firefox. Beta, dev and legacy builds drop the Firefox check.

use crate::config::{PRELOAD_FILE, PRELOAD_FIREFOX_CLAUSE, PRELOAD_REPLACEMENT_CLAUSE};
use crate::error::{BuildError, BuildResult};
use crate::models::Branch;
use crate::utils::{read_text, replace_once, write_text};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Patch `lib/content-script/preload.js` for `branch`.
///
/// Returns the patched file, or `None` when the branch needs no patch.
pub fn patch_preload_for_branch(root: &Path, branch: &Branch) -> BuildResult<Option<PathBuf>> {
    if !branch.allows_remote_script_rules() {
        debug!(%branch, "Preload script left untouched");
        return Ok(None);
    }

    let path = root.join(PRELOAD_FILE);
    let content = read_text(&path)?;
    let patched = patch_preload_content(content.trim()).map_err(|reason| BuildError::InvalidPreload {
        path: path.clone(),
        reason,
    })?;
    write_text(&path, &patched)?;

    info!(%branch, "Enabled remote script rules in preload script");
    Ok(Some(PathBuf::from(PRELOAD_FILE)))
}

/// Swap the Firefox clause once; the clause must occur exactly once.
pub fn patch_preload_content(content: &str) -> Result<String, String> {
    if !content.contains(PRELOAD_FIREFOX_CLAUSE) {
        return Err(format!("`{}` not found", PRELOAD_FIREFOX_CLAUSE));
    }

    let patched = replace_once(content, PRELOAD_FIREFOX_CLAUSE, PRELOAD_REPLACEMENT_CLAUSE);
    if patched.contains(PRELOAD_FIREFOX_CLAUSE) {
        return Err(format!("`{}` occurs more than once", PRELOAD_FIREFOX_CLAUSE));
    }

    Ok(patched)
}
