use clap::{Parser, Subcommand};
use layout_patch::{Pass, ProcessOptions, RunReport, process_files};
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Patch Android layout XML after dropping the Inter font
#[derive(Parser, Debug)]
#[command(name = "layout-patch")]
#[command(version = "0.1.0")]
#[command(about = "Strip Inter fontFamily attributes and repair the tags left behind", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output structured JSON instead of human-readable
    #[arg(short, long, global = true)]
    json: bool,

    /// Write the report to file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Transform and report without touching the files
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove android:fontFamily="@font/inter_*" attributes
    StripFonts {
        /// Layout files to patch, processed in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Insert the missing " />" before sibling tags
    CloseTags {
        /// Layout files to patch, processed in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("layout_patch=warn")),
        )
        .init();

    let args = Args::parse();

    let (pass, files) = match &args.command {
        Command::StripFonts { files } => (Pass::StripFontFamily, files),
        Command::CloseTags { files } => (Pass::CloseTags, files),
    };

    let options = ProcessOptions { dry_run: args.dry_run };
    let report = process_files(&files[..], pass, options);

    // Per-file failures are part of the report; the run itself still succeeded.
    if !report.is_complete_success() {
        warn!(failed = report.failed_count, total = report.files.len(), "some files were not processed");
    }
    output_report(&report, args.json, args.output.as_ref());
}

/// Format and output the report
fn output_report(report: &RunReport, json_mode: bool, output_path: Option<&String>) {
    let output = if json_mode {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| {
            r#"{"error": "Failed to serialize report"}"#.to_string()
        })
    } else {
        report.status_lines().join("\n")
    };

    // Write to file or stdout
    if let Some(path) = output_path {
        if let Err(e) = fs::write(path, &output) {
            eprintln!("Failed to write output to '{}': {}", path, e);
            std::process::exit(1);
        }
    } else if !output.is_empty() {
        println!("{}", output);
    }
}
