//! Script discovery in the background page

use crate::config::BACKGROUND_PAGE;
use crate::error::BuildResult;
use crate::models::EntryPage;
use crate::utils::{read_text, split_lines, substring_between};
use std::path::Path;
use tracing::warn;

/// Collect `src="…"` values from lines containing `<script`, in line order.
///
/// Only the first tag on a line is seen. Inline scripts have no `src` and are
/// skipped.
pub fn parse_entry_page(content: &str) -> EntryPage {
    let mut sources = Vec::new();

    for (index, line) in split_lines(content).enumerate() {
        if !line.contains("<script") {
            continue;
        }
        match substring_between(line, "src=\"", "\"") {
            Some(src) => sources.push(src.to_string()),
            None => warn!(line = index + 1, "Skipping <script> tag without src"),
        }
    }

    EntryPage { sources }
}

pub fn read_entry_page(root: &Path) -> BuildResult<EntryPage> {
    let content = read_text(&root.join(BACKGROUND_PAGE))?;
    Ok(parse_entry_page(&content))
}
