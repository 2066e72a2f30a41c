//! Report generation

use crate::models::BuildReport;
use anyhow::Result;
use std::path::PathBuf;

pub fn generate_markdown_report(report: &BuildReport) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Extension Build Report\n\n");

    // Summary
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Browser**: {}\n", report.browser));
    out.push_str(&format!("- **Branch**: {}\n", report.branch));
    out.push_str(&format!("- **Version**: {}\n", report.version));
    out.push_str(&format!("- **Script Rules**: {}\n", report.script_rules));
    out.push_str(&format!(
        "- **API Build**: {}\n\n",
        if report.api_build.is_some() { "yes" } else { "no" }
    ));

    push_file_list(&mut out, "Patched Files", &report.patched_files);
    push_file_list(&mut out, "Written Files", &report.written_files);

    if let Some(api) = &report.api_build {
        out.push_str("## API Build\n\n");
        out.push_str(&format!("- **Aggregate**: {}\n", api.aggregate.display()));
        out.push_str(&format!("- **Retained Files**: {}\n", api.retained_files));
        out.push_str(&format!("- **Removed Files**: {}\n", api.removed_files.len()));
        out.push_str(&format!("- **Removed Directories**: {}\n\n", api.removed_dirs.len()));

        push_file_list(&mut out, "Aggregated Scripts", &api.aggregated_scripts);
    }

    Ok(out)
}

pub fn generate_json_report(report: &BuildReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn push_file_list(out: &mut String, title: &str, files: &[PathBuf]) {
    if files.is_empty() {
        return;
    }
    out.push_str(&format!("## {}\n\n", title));
    for file in files {
        out.push_str(&format!("- `{}`\n", file.display()));
    }
    out.push('\n');
}
