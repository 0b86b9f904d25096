use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading page content from disk.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while reading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address such as 127.0.0.1")]
    InvalidHost { value: String },
}
