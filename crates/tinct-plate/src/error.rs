use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlateError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid plate config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid plate config: {0}")]
    Invalid(String),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
