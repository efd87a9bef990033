mod cli;
mod config;
mod error;
mod paths;
mod report;
mod version;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CheckmergeConfig;
use error::ReportError;
use report::document::Document;
use report::{merger, xml};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Logs go to stderr; stdout is reserved for the
    // merged report.
    let filter = if cli.verbose {
        EnvFilter::new("checkmerge=debug")
    } else if cli.quiet {
        EnvFilter::new("checkmerge=error")
    } else {
        EnvFilter::new("checkmerge=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    debug!("checkmerge v{}", env!("CARGO_PKG_VERSION"));

    let config = std::env::current_dir()
        .ok()
        .and_then(|cwd| CheckmergeConfig::load(&cwd));

    let base = paths::resolve_base(
        cli.base_path.as_deref(),
        config.as_ref().and_then(|c| c.merge.base_path.as_deref()),
    );
    match &base {
        Some(base) => debug!("relativizing absolute paths against {}", base.display()),
        None => debug!("no base directory established; paths are left as-is"),
    }

    let mut merged = Document::default();
    let mut candidates = Vec::new();

    for input in &cli.inputs {
        let document = xml::read_document(input)?;
        debug!(
            "{}: {} file groups, {} violations",
            input.display(),
            document.files.len(),
            document.violation_count()
        );

        match version::candidate(&document.version) {
            Some(v) => candidates.push(v),
            None => debug!("{}: no parseable version attribute", input.display()),
        }

        merger::merge_into(document, &mut merged, |name| match base.as_deref() {
            Some(base) => paths::relative_to(name, base),
            None => name.to_string(),
        });
    }

    merger::sort_document(&mut merged);

    let selection = version::select(candidates);
    if let version::Selection::Fallback(v) = &selection {
        warn!("no input declared a valid version; stamping default {}", v);
    }
    merged.version = selection.into_version().to_string();

    let rendered = xml::render(&merged)?;

    let out_path = cli.out.clone().or_else(|| config.and_then(|c| c.output.out));
    match out_path {
        Some(path) => {
            std::fs::write(&path, &rendered).map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
            info!("merged report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    print_summary(cli.inputs.len(), &merged, cli.quiet);

    Ok(())
}

/// One-line human summary on stderr. Honors NO_COLOR.
fn print_summary(inputs: usize, merged: &Document, quiet: bool) {
    if quiet {
        return;
    }

    let line = format!(
        "merged {} reports: {} files, {} violations, version {}",
        inputs,
        merged.files.len(),
        merged.violation_count(),
        merged.version
    );

    if std::env::var_os("NO_COLOR").is_none() {
        eprintln!("{}", line.bold());
    } else {
        eprintln!("{}", line);
    }
}
