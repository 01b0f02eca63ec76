//! Error types for region persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a region list.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid format structure or content
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },

    /// A region entry has no node list
    #[error("Region {region} has no node list")]
    MalformedRegion {
        /// Index of the region in the payload
        region: usize,
    },

    /// A node entry is missing a coordinate
    #[error("Node {node} of region {region} is missing its '{field}' coordinate")]
    MalformedNode {
        /// Index of the region in the payload
        region: usize,
        /// Index of the node within the region
        node: usize,
        /// Name of the missing field
        field: &'static str,
    },
}

impl FormatError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Errors raised by a persistence backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing has been saved yet
    #[error("No saved regions at {path:?}")]
    NotFound {
        /// Where the snapshot was expected
        path: PathBuf,
    },

    /// A request of this kind is already in flight
    #[error("A {0} request is already pending")]
    Pending(&'static str),

    /// The stored payload could not be decoded
    #[error(transparent)]
    Format(#[from] FormatError),
}
