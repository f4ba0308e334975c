//! Alliterant CLI — alliteration analysis for Old English poetry.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use alliterant_core::types::{LineAnalysis, LineReport};
use alliterant_core::Analyzer;

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "alliterant",
    about = "Alliteration detection for Old English poetry",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single line of verse
    Line(LineArgs),
    /// Analyze a text file line by line
    File(FileArgs),
}

// ─── Shared arguments (embedded in each subcommand) ──────────────

#[derive(Parser, Debug)]
struct SharedArgs {
    /// Emit JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Analyze one line of verse for alliteration")]
struct LineArgs {
    /// The line to analyze
    text: String,

    #[command(flatten)]
    shared: SharedArgs,
}

#[derive(Parser, Debug)]
#[command(about = "Analyze every line of a plain-text file")]
struct FileArgs {
    /// Path to the text file
    path: PathBuf,

    #[command(flatten)]
    shared: SharedArgs,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let log_level = match &cli.command {
        Command::Line(a) if a.shared.verbose => "debug",
        Command::File(a) if a.shared.verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Line(args) => run_line(args),
        Command::File(args) => run_file(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Render the clusters of one analysis, indented one level.
fn print_clusters(analysis: &LineAnalysis, indent: &str) {
    for cluster in &analysis.clusters {
        println!("{}{}: {}", indent, cluster.class, cluster.words.join(" "));
    }
}

// ─── Line runner ─────────────────────────────────────────────────

fn run_line(args: LineArgs) -> Result<()> {
    let analyzer = Analyzer::old_english();
    let analysis = analyzer.analyze_line(&args.text)?;

    if args.shared.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}", analysis.text);
    print_clusters(&analysis, "  ");
    println!("Alliteration count: {}", analysis.alliteration_count);

    Ok(())
}

// ─── File runner ─────────────────────────────────────────────────

fn run_file(args: FileArgs) -> Result<()> {
    let analyzer = Analyzer::old_english();
    let reports: Vec<LineReport> = analyzer.analyze_file(&args.path)?;

    if args.shared.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("no.  line");
    for report in &reports {
        match (&report.analysis, &report.error) {
            (Some(analysis), _) => {
                println!("{:<4} {}", report.index, analysis.text);
                print_clusters(analysis, "     ");
                println!("     count: {}", analysis.alliteration_count);
            }
            (None, Some(error)) => {
                println!("{:<4} [skipped: {}]", report.index, error);
            }
            (None, None) => {}
        }
    }

    let total: usize = reports
        .iter()
        .filter_map(|r| r.analysis.as_ref())
        .map(|a| a.alliteration_count)
        .sum();
    println!("Total alliterating words: {}", total);

    Ok(())
}
