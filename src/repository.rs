use anyhow::{Context, Result, bail};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// identity of the repository whose tree is listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// derive the identity from a git remote url
    ///
    /// handles `https://host/owner/name(.git)`, `ssh://git@host/owner/name.git`
    /// and scp-like `git@host:owner/name.git` forms
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let trimmed = url.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

        // scp-like urls separate host and path with a colon and have no scheme
        let path = match trimmed.split_once("://") {
            Some((_, rest)) => rest.split_once('/').map(|(_, path)| path)?,
            None => trimmed.split_once(':').map(|(_, path)| path)?,
        };

        let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
        let name = segments.next()?;
        let owner = segments.next()?;
        Some(Self::new(owner, name))
    }

    /// derive the identity from the `origin` remote of the checkout containing `path`
    pub fn discover(path: &Path) -> Result<Self> {
        // can be anywhere within the checkout
        let repo = git2::Repository::discover(path).context("not in a git repository")?;
        let remote = repo
            .find_remote("origin")
            .context("git repository has no 'origin' remote")?;
        let url = remote
            .url()
            .context("'origin' remote url is not valid utf-8")?;

        Self::from_remote_url(url)
            .with_context(|| format!("cannot derive owner/name from remote url '{url}'"))
    }
}

impl FromStr for Repository {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => bail!("invalid repository '{s}': expected 'owner/name'"),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
