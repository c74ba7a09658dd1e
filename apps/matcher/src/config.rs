use std::path::PathBuf;

use anyhow::Result;

/// Harness configuration loaded from environment variables.
/// Every variable is optional; defaults point at the sample documents
/// shipped with the crate.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_path: PathBuf,
    pub search_criteria_path: PathBuf,
    /// When set, the job to evaluate is read from this JSON file.
    pub job_posting_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resume_path: path_env("RESUME_PATH")
                .unwrap_or_else(|| default_config_path("resume.json")),
            search_criteria_path: path_env("SEARCH_CRITERIA_PATH")
                .unwrap_or_else(|| default_config_path("search-criteria.json")),
            job_posting_path: path_env("JOB_POSTING_PATH"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn path_env(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn default_config_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join(file)
}
