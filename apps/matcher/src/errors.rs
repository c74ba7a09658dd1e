use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading documents or rendering output.
#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
