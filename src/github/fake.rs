use super::{ContentLister, FileEntry, ListingError};
use crate::repository::Repository;
use std::cell::RefCell;
use std::collections::HashMap;

/// in-memory tree keyed by directory path, recording every query made
#[derive(Default)]
pub struct FakeTree {
    dirs: HashMap<String, Vec<FileEntry>>,
    failing: Option<String>,
    queries: RefCell<Vec<String>>,
}

impl FakeTree {
    pub fn with_dir(mut self, path: &str, entries: Vec<FileEntry>) -> Self {
        self.dirs.insert(path.to_string(), entries);
        self
    }

    pub fn failing_at(mut self, path: &str) -> Self {
        self.failing = Some(path.to_string());
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl ContentLister for FakeTree {
    fn list_directory(
        &self,
        _repository: &Repository,
        path: &str,
    ) -> Result<Vec<FileEntry>, ListingError> {
        self.queries.borrow_mut().push(path.to_string());
        if self.failing.as_deref() == Some(path) {
            return Err(ListingError::Status {
                path: path.to_string(),
                status: 502,
            });
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| ListingError::Status {
                path: path.to_string(),
                status: 404,
            })
    }
}
