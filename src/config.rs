use crate::repository::Repository;
use crate::selector::TestSuffix;
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// everything a run needs, resolved once from flags and the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// batch size recorded by the previous run
    pub previous_count: u64,

    /// directory whose tree is listed
    pub source_path: String,

    /// repository owning the tree
    pub repository: Repository,

    pub api: ApiConfig,

    /// test file to source file naming convention
    pub suffix: TestSuffix,

    /// file to append job outputs to; stdout when None
    pub github_output: Option<PathBuf>,

    /// also print the selection as json
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub url: String,
    pub token: Option<String>,
    /// branch, tag or sha to list; the default branch when None
    pub git_ref: Option<String>,
}

/// parse the count persisted by the previous run
///
/// an absent or blank value means there was no previous run. anything else
/// must be a non-negative integer; a malformed value is rejected rather than
/// guessed at, since it would silently reset or freeze the batch.
pub fn parse_previous_count(raw: Option<&str>) -> Result<u64> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(0);
    };

    value
        .parse::<u64>()
        .map_err(|_| anyhow!("invalid previous count '{value}': expected a non-negative integer"))
}
