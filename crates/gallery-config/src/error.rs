use std::path::PathBuf;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed props: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page length must be at least 1")]
    InvalidPageLength,

    #[error("Paginator must display at least one page in its range")]
    InvalidPageRange,
}
