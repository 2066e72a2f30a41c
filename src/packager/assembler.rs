//! Concatenation of background scripts into the single API script

use crate::config::{API_WRAPPER_CLOSE, API_WRAPPER_OPEN, LICENSE_BANNER, LICENSE_MARKER};
use crate::error::BuildResult;
use crate::models::EntryPage;
use crate::utils::read_text;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

lazy_static! {
    // From the first `/*` through the `*/` closing the comment that holds the marker.
    static ref LICENSE_COMMENT: Regex = Regex::new(&format!(
        r"(?s)/\*.+{}.*?\*/",
        regex::escape(LICENSE_MARKER)
    ))
    .unwrap();
}

/// A background script read from the build tree
#[derive(Debug, Clone)]
pub struct EntryScript {
    pub path: PathBuf,
    pub content: String,
}

/// Read every script the entry page references, in document order.
pub fn read_entry_scripts(root: &Path, page: &EntryPage) -> BuildResult<Vec<EntryScript>> {
    page.sources
        .iter()
        .map(|src| {
            let path = root.join(src);
            debug!(script = %path.display(), "Reading entry script");
            let content = read_text(&path)?;
            Ok(EntryScript { path, content })
        })
        .collect()
}

/// Remove the first embedded project license comment, if any.
pub fn strip_license_comment(content: &str) -> Cow<'_, str> {
    LICENSE_COMMENT.replace(content, "")
}

/// Build the aggregate: banner, wrapper, then each script stripped and trimmed.
pub fn assemble_api_script(scripts: &[EntryScript]) -> String {
    let mut output = String::new();
    output.push_str(LICENSE_BANNER);
    output.push_str("\r\n\r\n");
    output.push_str(API_WRAPPER_OPEN);

    for script in scripts {
        let body = strip_license_comment(&script.content);
        output.push_str("\r\n");
        output.push_str(body.trim());
        output.push_str("\r\n");
    }

    output.push_str(API_WRAPPER_CLOSE);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn script(content: &str) -> EntryScript {
        EntryScript {
            path: PathBuf::from("lib/test.js"),
            content: content.to_string(),
        }
    }

    const LICENSED: &str = "/**\n * This file is part of Adguard Browser Extension (https://github.com/AdguardTeam/AdguardBrowserExtension).\n *\n * GNU LGPL\n */\n\n\nvar adguard = {};\n";

    #[test]
    fn test_strip_license_comment() {
        assert_eq!(strip_license_comment(LICENSED).trim(), "var adguard = {};");
    }

    #[test]
    fn test_other_comments_are_kept() {
        let content = "var a = 1;\n/* helper */\nvar b = 2;";
        assert_eq!(strip_license_comment(content), content);
    }

    #[test]
    fn test_match_spans_to_last_marker_comment() {
        let content = format!("{}var a;\n/* This file is part of Adguard Browser Extension x */", LICENSED);
        let stripped = strip_license_comment(&content);
        assert!(!stripped.contains("This file is part of"));
        assert!(!stripped.contains("var adguard"));
    }

    #[test]
    fn test_comment_closing_right_after_marker() {
        let content = "/* This file is part of Adguard Browser Extension*/\nvar keep = 1;\n/* helper */\nvar b = 2;";
        assert_eq!(
            strip_license_comment(content),
            "\nvar keep = 1;\n/* helper */\nvar b = 2;"
        );
    }

    #[test]
    fn test_assemble_api_script() {
        let scripts = vec![script(LICENSED), script("\n\n  var b = 2;  \n")];
        let output = assemble_api_script(&scripts);

        let expected = format!(
            "{}\r\n\r\n(function (window, undefined) {{\r\n\r\nvar adguard = {{}};\r\n\r\nvar b = 2;\r\n\r\n}})(window);",
            LICENSE_BANNER
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_assemble_without_scripts() {
        let output = assemble_api_script(&[]);
        assert!(output.starts_with(LICENSE_BANNER));
        assert!(output.ends_with("(function (window, undefined) {\r\n\r\n})(window);"));
    }

    #[test]
    fn test_aggregate_banner_is_stripped_on_reassembly() {
        let first = assemble_api_script(&[script("var a = 1;")]);
        let second = assemble_api_script(&[script(&first)]);
        assert_eq!(second.matches(LICENSE_MARKER).count(), 1);
        assert!(second.contains("(function (window, undefined) {\r\n\r\n(function (window, undefined) {"));
    }
}
