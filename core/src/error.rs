use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a server selection from disk. The transformation
/// functions themselves are total; only I/O and parsing can fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
