// inputs
pub const DEFAULT_SOURCE_PATH: &str = "src/app";
pub const DEFAULT_TEST_SUFFIX: &str = ".spec.ts";
pub const DEFAULT_SOURCE_SUFFIX: &str = ".ts";

// outputs
pub const OUTPUT_FILES: &str = "files-to-stryke";
pub const OUTPUT_COUNT: &str = "files-count";

// github
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const API_VERSION: &str = "2022-11-28";
pub const USER_AGENT: &str = concat!("stryke-batch/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
