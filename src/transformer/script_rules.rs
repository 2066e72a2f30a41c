//! Bundled JS injection rules (`local-script-rules.js`)

use crate::config::{LICENSE_BANNER, LOCAL_SCRIPT_RULES_FILE, SCRIPT_RULES_HEADER, SCRIPT_RULES_TABLE};
use crate::error::BuildResult;
use crate::utils::{escape_javascript, write_text};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read rules one per line, skipping blanks and `!` comments.
///
/// Duplicates are dropped and first-seen order is kept, so the generated file
/// is stable for a given input.
pub fn load_script_rules(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .filter(|line| seen.insert(*line))
        .map(String::from)
        .collect()
}

/// One assignment statement per rule, in iteration order.
pub fn render_script_rules<S: AsRef<str>>(rules: &[S]) -> String {
    rules
        .iter()
        .map(|rule| {
            format!(
                "{}[\"{}\"] = true;\r\n",
                SCRIPT_RULES_TABLE,
                escape_javascript(rule.as_ref())
            )
        })
        .collect()
}

pub fn render_script_rules_file<S: AsRef<str>>(rules: &[S]) -> String {
    format!("{}\r\n{}{}", LICENSE_BANNER, SCRIPT_RULES_HEADER, render_script_rules(rules))
}

/// Write `lib/filter/rules/local-script-rules.js` under `root`.
pub fn write_local_script_rules<S: AsRef<str>>(root: &Path, rules: &[S]) -> BuildResult<PathBuf> {
    write_text(&root.join(LOCAL_SCRIPT_RULES_FILE), &render_script_rules_file(rules))?;
    info!(count = rules.len(), "Wrote local script rules");
    Ok(PathBuf::from(LOCAL_SCRIPT_RULES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_script_rules() {
        let rules = ["example.org#%#window.a = 'b';", "test.com#%#//scriptlet(\"abort\")"];
        assert_eq!(
            render_script_rules(&rules),
            concat!(
                "adguard.rules.DEFAULT_SCRIPT_RULES[\"example.org#%#window.a = \\'b\\';\"] = true;\r\n",
                "adguard.rules.DEFAULT_SCRIPT_RULES[\"test.com#%#\\/\\/scriptlet(\\\"abort\\\")\"] = true;\r\n",
            )
        );
    }

    #[test]
    fn test_render_empty_rules_file() {
        let output = render_script_rules_file::<&str>(&[]);
        assert!(output.starts_with(LICENSE_BANNER));
        assert!(output.ends_with("adguard.rules.DEFAULT_SCRIPT_RULES = Object.create(null);\r\n"));
    }

    #[test]
    fn test_load_script_rules() {
        let text = "! Title: rules\n\nexample.org#%#var a;\r\n  test.com#%#var b;  \nexample.org#%#var a;\n";
        assert_eq!(
            load_script_rules(text),
            vec!["example.org#%#var a;", "test.com#%#var b;"]
        );
    }

    #[test]
    fn test_write_creates_rules_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let written = write_local_script_rules(temp_dir.path(), &["a#%#b"]).unwrap();
        let content = std::fs::read_to_string(temp_dir.path().join(&written)).unwrap();
        assert!(content.ends_with("adguard.rules.DEFAULT_SCRIPT_RULES[\"a#%#b\"] = true;\r\n"));
    }
}
