use kogei::KogeiError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not load catalog: {0}")]
    CatalogLoadError(String),

    #[error("Unknown craft: {0}")]
    CraftNotFound(String),

    #[error("Failed to write avatar: {0}")]
    AvatarWriteError(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    KogeiError(#[from] KogeiError),
}
