use crate::constants::{API_VERSION, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::repository::Repository;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;
use url::Url;

/// type of an entry in a directory listing, as reported by the contents api
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// a single entry returned by one directory listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
}

#[cfg(test)]
impl FileEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            path: path.into(),
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Dir,
            path: path.into(),
        }
    }
}

/// failure to reach or parse the remote tree
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("invalid api url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("listing '{path}' failed with HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("listing '{path}' failed")]
    Transport {
        path: String,
        #[source]
        source: ureq::Error,
    },

    #[error("listing '{path}' returned an unreadable response")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: String },
}

/// capability to list the direct entries of one directory in a repository
pub trait ContentLister {
    fn list_directory(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<Vec<FileEntry>, ListingError>;
}

/// the contents api answers with an array for directories and an object for anything else
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Directory(Vec<FileEntry>),
    Single(FileEntry),
}

/// blocking client for the github contents api
pub struct GitHubClient {
    agent: Agent,
    api_url: Url,
    token: Option<String>,
    git_ref: Option<String>,
}

impl GitHubClient {
    pub fn new(
        api_url: &str,
        token: Option<String>,
        git_ref: Option<String>,
    ) -> Result<Self, ListingError> {
        let api_url = Url::parse(api_url).map_err(|e| ListingError::InvalidUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ListingError::InvalidUrl {
                url: api_url.to_string(),
                reason: "not a base url".to_string(),
            });
        }

        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .build()
            .into();

        Ok(Self {
            agent,
            api_url,
            token: token.filter(|t| !t.trim().is_empty()),
            git_ref: git_ref.filter(|r| !r.trim().is_empty()),
        })
    }

    /// build `{api}/repos/{owner}/{name}/contents/{path}`, percent-encoding each segment
    pub fn contents_url(&self, repository: &Repository, path: &str) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([
                    "repos",
                    repository.owner.as_str(),
                    repository.name.as_str(),
                    "contents",
                ])
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        if let Some(git_ref) = &self.git_ref {
            url.query_pairs_mut().append_pair("ref", git_ref);
        }
        url
    }
}

impl ContentLister for GitHubClient {
    fn list_directory(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<Vec<FileEntry>, ListingError> {
        let url = self.contents_url(repository, path);

        let mut request = self
            .agent
            .get(url.as_str())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let mut response = request.call().map_err(|e| call_error(path, e))?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| call_error(path, e))?;

        parse_listing(path, &body)
    }
}

/// classify a failed request; non-2xx answers keep their status code
fn call_error(path: &str, error: ureq::Error) -> ListingError {
    match error {
        ureq::Error::StatusCode(status) => ListingError::Status {
            path: path.to_string(),
            status,
        },
        source => ListingError::Transport {
            path: path.to_string(),
            source,
        },
    }
}

/// entries of a contents api response body for `path`
fn parse_listing(path: &str, body: &str) -> Result<Vec<FileEntry>, ListingError> {
    let response: ContentsResponse =
        serde_json::from_str(body).map_err(|source| ListingError::Decode {
            path: path.to_string(),
            source,
        })?;

    match response {
        ContentsResponse::Directory(entries) => Ok(entries),
        ContentsResponse::Single(entry) => Err(ListingError::NotADirectory { path: entry.path }),
    }
}

#[cfg(test)]
pub mod fake;
