use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Guide request returned status {status}")]
    FetchError { status: reqwest::StatusCode },

    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Guide payload is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GuideError>;
