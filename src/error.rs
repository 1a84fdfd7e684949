//! Error types shared by the shell, the screens and the asset loader.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop the application
#[derive(Debug, Error)]
pub enum AppError {
    /// A background image was missing or could not be decoded
    #[error("failed to load background image {path}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Terminal setup, drawing or event polling failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
