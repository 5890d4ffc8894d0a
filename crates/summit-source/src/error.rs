//! Error types for summit-source

use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid JSON in {location}: {message}")]
    InvalidJson {
        location: String,
        message: String,
    },

    #[error("Duplicate transfer id {id} in snapshot")]
    DuplicateId { id: i64 },

    #[error("Source unavailable: {message}")]
    Unavailable { message: String },

    #[error("IO error")]
    IoError(#[from] io::Error),
}
