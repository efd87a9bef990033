use clap::Parser;
use std::path::PathBuf;

/// checkmerge — merge checkstyle XML reports
///
/// Combines per-file violations across reports, relativizes absolute paths,
/// orders the result deterministically, and stamps the newest input version.
#[derive(Parser, Debug)]
#[command(
    name = "checkmerge",
    version,
    about = "Merge checkstyle XML reports into a single document",
    long_about = "checkmerge combines several checkstyle XML reports into one.\nViolations for the same file are merged into a single entry, absolute\npaths are rewritten relative to a base directory, and the output is\nsorted so repeated runs are byte-identical."
)]
pub struct Cli {
    /// Input checkstyle XML reports (at least one)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write the merged report to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Base directory for relativizing absolute file paths
    /// (default: .checkmerge.toml value, else the current directory)
    #[arg(short, long)]
    pub base_path: Option<PathBuf>,

    /// Enable verbose output (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}
