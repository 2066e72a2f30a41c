//! Report generation

pub mod generator;

use crate::models::BuildReport;
use anyhow::Result;

pub use generator::generate_json_report;

pub fn generate_report(report: &BuildReport) -> Result<String> {
    generator::generate_markdown_report(report)
}
