//! Line-based reading of `manifest.json`
//!
//! The manifest is not parsed as JSON. Every line mentioning `.js` yields the
//! text inside its first pair of double quotes, so a non-path string value that
//! happens to contain `.js` is picked up too.

use crate::config::MANIFEST_FILE;
use crate::error::BuildResult;
use crate::models::ManifestDescriptor;
use crate::utils::{read_text, split_lines, substring_between};
use std::path::Path;
use tracing::warn;

/// Extract declared script paths from manifest text
pub fn parse_manifest_descriptor(content: &str) -> ManifestDescriptor {
    let mut paths = Vec::new();

    for (index, line) in split_lines(content).enumerate() {
        if !line.contains(".js") {
            continue;
        }
        match substring_between(line, "\"", "\"") {
            Some(path) => paths.push(path.to_string()),
            None => warn!(line = index + 1, "Skipping manifest line without a quoted value"),
        }
    }

    ManifestDescriptor { paths }
}

/// Read `manifest.json` from a build root
pub fn read_manifest_descriptor(root: &Path) -> BuildResult<ManifestDescriptor> {
    let content = read_text(&root.join(MANIFEST_FILE))?;
    Ok(parse_manifest_descriptor(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_background_scripts() {
        let manifest = r#"{
    "name": "Test",
    "version": "${version}",
    "background": {
        "scripts": [
            "lib/a.js",
            "lib/b.js"
        ]
    },
    "icons": {
        "16": "img/x.png"
    }
}"#;

        let descriptor = parse_manifest_descriptor(manifest);
        assert_eq!(descriptor.paths, vec!["lib/a.js", "lib/b.js"]);
    }

    #[test]
    fn test_first_quote_pair_wins() {
        let manifest = r#"    "js": ["lib/content-script/preload.js", "lib/content-script/content.js"],"#;
        let descriptor = parse_manifest_descriptor(manifest);
        assert_eq!(descriptor.paths, vec!["js"]);
    }

    #[test]
    fn test_non_path_values_are_picked_up() {
        let manifest = r#"    "description": "Works with node.js too","#;
        let descriptor = parse_manifest_descriptor(manifest);
        assert_eq!(descriptor.paths, vec!["description"]);
    }

    #[test]
    fn test_line_without_quotes_is_skipped() {
        let descriptor = parse_manifest_descriptor("lib/a.js\n\"lib/b.js\"");
        assert_eq!(descriptor.paths, vec!["lib/b.js"]);
    }

    #[test]
    fn test_crlf_lines() {
        let descriptor = parse_manifest_descriptor("\"lib/a.js\",\r\n\"lib/b.js\"\r\n");
        assert_eq!(descriptor.paths, vec!["lib/a.js", "lib/b.js"]);
    }

    #[test]
    fn test_lone_carriage_return_lines() {
        let descriptor = parse_manifest_descriptor("[\r  \"lib/a.js\",\r  \"lib/b.js\"\r]");
        assert_eq!(descriptor.paths, vec!["lib/a.js", "lib/b.js"]);
    }

    #[test]
    fn test_missing_manifest_is_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert!(read_manifest_descriptor(temp_dir.path()).is_err());
    }
}
