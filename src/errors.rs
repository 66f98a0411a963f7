use thiserror::Error;

pub type Result<T> = std::result::Result<T, KogeiError>;

#[derive(Error, Debug)]
pub enum KogeiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path error: {0}")]
    Path(String),
    #[error("Parsing error: {0}")]
    Parse(String),
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
    #[error("Avatar size must be positive, got {0}")]
    InvalidSize(u32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for KogeiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<walkdir::Error> for KogeiError {
    fn from(e: walkdir::Error) -> Self {
        Self::Path(e.to_string())
    }
}

impl From<url::ParseError> for KogeiError {
    fn from(e: url::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
