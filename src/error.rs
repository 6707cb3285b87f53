use std::io;

use thiserror::Error;

use crate::types::ItemId;

/// Unified error type for the collections, the store and the CSV layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Index-based access or mutation outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Pop or peek on an empty stack.
    #[error("container is empty")]
    EmptyContainer,

    /// No record with this id.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// Rejected input: negative capacity, invalid record fields.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error from reading or writing the inventory file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A CSV row that cannot be decoded into a record.
    #[error("corruption: {0}")]
    Corruption(String),
}

impl Error {
    /// Whether this error is the "nothing there" signal rather than a failure.
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Error::EmptyContainer)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
