//! Browser Extension Build Helper CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use extbuild::report::{generate_json_report, generate_report};
use extbuild::transformer::load_script_rules;
use extbuild::{compile_extension, create_api_build, Branch, Browser, BuildOptions, BuildReport, MetadataParams};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "extbuild")]
#[command(about = "Prepare a browser extension build tree for one target", long_about = None)]
#[command(version)]
struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Patch metadata, write script rules and optionally create the API build
    Build {
        /// Build directory (a copy of the extension sources)
        #[arg(short, long)]
        root: PathBuf,

        /// Target browser: chromium, edge, safari, firefox, firefox-legacy
        #[arg(short, long)]
        browser: Browser,

        /// Extension version substituted for ${version}
        #[arg(long = "ext-version")]
        version: String,

        #[arg(long)]
        extension_id: Option<String>,

        #[arg(long)]
        update_url: Option<String>,

        /// Appended to the extension name, e.g. " (Beta)"
        #[arg(long)]
        name_postfix: Option<String>,

        /// Release channel (release, beta, dev, legacy, dev-legacy)
        #[arg(long, default_value = "release")]
        branch: Branch,

        /// File with bundled JS rules, one per line
        #[arg(long)]
        script_rules: Option<PathBuf>,

        /// Collapse the library into a single API script
        #[arg(long)]
        api: bool,

        /// Write a Markdown report (or JSON when the path ends in .json)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Only create the API build
    Api {
        #[arg(short, long)]
        root: PathBuf,

        #[arg(short, long)]
        browser: Browser,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Build {
            root,
            browser,
            version,
            extension_id,
            update_url,
            name_postfix,
            branch,
            script_rules,
            api,
            report,
        } => {
            println!("{}", "Extension Build".bold().blue());
            println!("{}", "=".repeat(50).blue());
            println!();

            run_build(
                &root,
                BuildOptions {
                    browser,
                    branch,
                    metadata: MetadataParams {
                        version,
                        extension_id,
                        update_url,
                        extension_name_postfix: name_postfix,
                    },
                    script_rules: Vec::new(),
                    api_build: api,
                },
                script_rules.as_deref(),
                report.as_deref(),
            )
        }

        Commands::Api { root, browser } => {
            println!("{}", "Creating API build...".bold());
            println!();

            create_api_build(&root, browser)
                .map(|summary| {
                    println!("{}", "✅ API build created".green().bold());
                    println!("  - Aggregate: {}", root.join(&summary.aggregate).display());
                    println!("  - Scripts joined: {}", summary.aggregated_scripts.len());
                    println!("  - Files removed: {}", summary.removed_files.len());
                    println!("  - Directories removed: {}", summary.removed_dirs.len());
                })
                .map_err(anyhow::Error::from)
        }
    };

    if let Err(e) = outcome {
        eprintln!("{}", "❌ Build failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run_build(
    root: &Path,
    mut options: BuildOptions,
    rules_path: Option<&Path>,
    report_path: Option<&Path>,
) -> Result<()> {
    if let Some(path) = rules_path {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script rules from {}", path.display()))?;
        options.script_rules = load_script_rules(&content);
    }

    let report = compile_extension(root, &options)?;
    print_summary(&report);

    if let Some(path) = report_path {
        let content = if path.extension().and_then(|e| e.to_str()) == Some("json") {
            generate_json_report(&report)?
        } else {
            generate_report(&report)?
        };
        fs::write(path, content).with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("  - Report: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &BuildReport) {
    println!("{}", "✅ Build prepared successfully!".green().bold());
    println!();
    println!("📊 Summary:");
    println!("  - Browser: {}", report.browser);
    println!("  - Branch: {}", report.branch);
    println!("  - Files patched: {}", report.patched_files.len());
    println!("  - Script rules: {}", report.script_rules);
    if let Some(api) = &report.api_build {
        println!("  - API scripts joined: {}", api.aggregated_scripts.len());
        println!("  - Files removed: {}", api.removed_files.len());
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
