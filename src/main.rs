mod cli;
mod config;
mod constants;
mod github;
mod lister;
mod output;
mod repository;
mod selector;
mod ui;

use crate::cli::Cli;
use crate::config::Config;
use crate::github::{ContentLister, GitHubClient, ListingError};
use crate::selector::Selection;
use anyhow::{Context, Result};
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse_args();
    ui::set_verbose(cli.verbose);

    if let Err(e) = run(cli) {
        ui::fail(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let client = GitHubClient::new(
        &config.api.url,
        config.api.token.clone(),
        config.api.git_ref.clone(),
    )?;

    execute(&client, &config, &mut io::stdout().lock())?;
    Ok(())
}

/// list, select and publish one batch
///
/// job outputs go to the configured output file, or to `out` when there is
/// none; the json summary always goes to `out`. nothing is written unless the
/// whole selection succeeded.
fn execute(
    source: &impl ContentLister,
    config: &Config,
    out: &mut impl Write,
) -> Result<Selection> {
    status!(
        "listing {} in {}...",
        config.source_path,
        config.repository
    );
    let batch = ui::with_spinner(|| plan_batch(source, config))?;

    info!("{}", batch.found_message());
    if batch.available == 0 {
        warning!("No test files found");
        debug!(
            "nothing ending in {} under {}",
            config.suffix.test,
            config.source_path
        );
    }

    status!(
        "selected {} of {} test-bearing {} ({} files listed, previous count {})",
        batch.selection.files.len(),
        batch.available,
        if batch.available == 1 { "file" } else { "files" },
        batch.listed,
        config.previous_count
    );
    for file in &batch.selection.files {
        let test = config.suffix.test_for(file).unwrap_or_default();
        debug!("  {} (tested by {})", file, test);
    }

    match &config.github_output {
        Some(path) => output::append_outputs(&batch.selection, path)?,
        None => {
            output::write_outputs(&batch.selection, out).context("failed to write outputs")?
        }
    }
    if config.json {
        let json = serde_json::to_string(&batch.selection)?;
        writeln!(out, "{json}").context("failed to write json")?;
    }

    info!("files count: {}", batch.selection.count);
    Ok(batch.selection)
}

/// result of one run: the selection plus the sizes it was drawn from
#[derive(Debug)]
struct Batch {
    selection: Selection,
    listed: usize,
    available: usize,
}

impl Batch {
    /// the summary line ci logs are searched for
    fn found_message(&self) -> String {
        format!("Found {} files with tests.", self.available)
    }
}

fn plan_batch(source: &impl ContentLister, config: &Config) -> Result<Batch, ListingError> {
    let files = lister::list_files(source, &config.repository, &config.source_path)?;
    let test_files = selector::test_bearing_files(&files, &config.suffix);
    let selection = selector::select_batch(&test_files, config.previous_count);

    Ok(Batch {
        selection,
        listed: files.len(),
        available: test_files.len(),
    })
}
