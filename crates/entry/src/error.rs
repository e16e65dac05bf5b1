//! Error types for document reading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading a structured document.
#[derive(Debug, Error)]
pub enum DocumentError {
	/// Error reading a document file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The document is not well-formed.
	#[error("parse error: {0}")]
	Parse(#[from] serde_json::Error),

	/// The same key appears twice in one object.
	#[error("duplicate key: {0}")]
	DuplicateKey(String),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
