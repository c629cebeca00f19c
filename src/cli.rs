use crate::config::{ApiConfig, Config, parse_previous_count};
use crate::constants::{
    DEFAULT_API_URL, DEFAULT_SOURCE_PATH, DEFAULT_SOURCE_SUFFIX, DEFAULT_TEST_SUFFIX,
};
use crate::repository::Repository;
use crate::selector::TestSuffix;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// stryke-batch: pick the next batch of tested source files for mutation testing
#[derive(Parser, Debug)]
#[command(name = "stryke-batch", version, about, long_about = None)]
pub struct Cli {
    /// number of files selected by the previous run (blank or absent on the first run)
    #[arg(long, env = "FILESTOSTRYKE_COUNT", value_name = "N")]
    pub previous_count: Option<String>,

    /// directory to search for test files (blank means the default)
    #[arg(long, env = "SOURCE_PATH", default_value = DEFAULT_SOURCE_PATH)]
    pub source_path: String,

    /// repository as owner/name (defaults to the origin remote of the current checkout)
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// api token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// api base url
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// branch, tag or commit to list (defaults to the default branch)
    #[arg(long = "ref", env = "STRYKE_REF", value_name = "REF")]
    pub git_ref: Option<String>,

    /// suffix marking a test file
    #[arg(long, default_value = DEFAULT_TEST_SUFFIX)]
    pub test_suffix: String,

    /// suffix replacing the test suffix to name the tested source file
    #[arg(long, default_value = DEFAULT_SOURCE_SUFFIX)]
    pub source_suffix: String,

    /// append job outputs to this file instead of printing them
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "FILE")]
    pub github_output: Option<PathBuf>,

    /// also print the selection as json
    #[arg(long)]
    pub json: bool,

    /// log every listed directory
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// resolve flags and environment into a config
    pub fn into_config(self) -> Result<Config> {
        let previous_count = parse_previous_count(self.previous_count.as_deref())?;

        let repository = match self.repository.as_deref().map(str::trim) {
            Some(repository) if !repository.is_empty() => repository.parse()?,
            _ => Repository::discover(Path::new("."))
                .context("no repository given, pass --repository or set GITHUB_REPOSITORY")?,
        };

        // ci inputs that are declared but unset arrive as empty strings
        let source_path = match self.source_path.trim() {
            "" => DEFAULT_SOURCE_PATH.to_string(),
            path => path.to_string(),
        };

        anyhow::ensure!(
            !self.test_suffix.is_empty(),
            "test suffix must not be empty"
        );

        Ok(Config {
            previous_count,
            source_path,
            repository,
            api: ApiConfig {
                url: self.api_url,
                token: self.token,
                git_ref: self.git_ref,
            },
            suffix: TestSuffix::new(self.test_suffix, self.source_suffix),
            github_output: self.github_output.filter(|p| !p.as_os_str().is_empty()),
            json: self.json,
        })
    }
}
