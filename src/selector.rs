use serde::Serialize;

/// naming convention linking a test file to the source file it covers
///
/// a test file is the source stem followed by `test`, its source file is the
/// same stem followed by `source`, e.g. `a.spec.ts` and `a.ts`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuffix {
    pub test: String,
    pub source: String,
}

impl TestSuffix {
    pub fn new(test: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            source: source.into(),
        }
    }

    /// source path for a test file, or None if `path` is not a test file
    pub fn source_for(&self, path: &str) -> Option<String> {
        let stem = path.strip_suffix(self.test.as_str())?;
        Some(format!("{stem}{}", self.source))
    }

    /// test path for a source file, the inverse of `source_for`
    pub fn test_for(&self, path: &str) -> Option<String> {
        let stem = path.strip_suffix(self.source.as_str())?;
        Some(format!("{stem}{}", self.test))
    }
}

/// keep the test files in `files` and map each to its source file, in traversal order
pub fn test_bearing_files(files: &[String], suffix: &TestSuffix) -> Vec<String> {
    files
        .iter()
        .filter_map(|path| suffix.source_for(path))
        .collect()
}

/// the batch to analyse this run and the count to carry into the next one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    #[serde(rename = "files-to-stryke")]
    pub files: Vec<String>,
    #[serde(rename = "files-count")]
    pub count: u64,
}

impl Selection {
    pub fn joined(&self) -> String {
        self.files.join(",")
    }
}

/// grow the batch by one file per run until it covers the whole set
pub fn select_batch(test_files: &[String], previous_count: u64) -> Selection {
    let available = test_files.len() as u64;

    if test_files.is_empty() {
        Selection {
            files: Vec::new(),
            count: 0,
        }
    } else if available > previous_count {
        // previous_count < len, so previous_count + 1 <= len fits in usize
        let count = previous_count + 1;
        Selection {
            files: test_files[..count as usize].to_vec(),
            count,
        }
    } else {
        Selection {
            files: test_files.to_vec(),
            count: available,
        }
    }
}
