//! Error types for registry loading.

use std::fmt;
use std::path::PathBuf;

use namesake_entry::DocumentError;
use thiserror::Error;

/// Errors that abort loading a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// Error reading the registry file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The registry document is not well-formed.
	#[error("parse error: {0}")]
	Parse(serde_json::Error),

	/// A type key appears twice.
	#[error("duplicate type {0}")]
	DuplicateType(String),

	/// Strict verification found types unknown to the index.
	#[error("{}", missing_types_message(types))]
	MissingTypes {
		/// The unknown types, in document order.
		types: Vec<String>,
	},
}

impl From<DocumentError> for RegistryError {
	fn from(error: DocumentError) -> Self {
		match error {
			DocumentError::Io { path, error } => RegistryError::Io { path, error },
			DocumentError::Parse(error) => RegistryError::Parse(error),
			DocumentError::DuplicateKey(key) => RegistryError::DuplicateType(key),
		}
	}
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Non-fatal problem found while loading a registry.
///
/// These are collected on the registry and logged, but do not prevent the
/// rest of the document from loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryWarning {
	/// An object entry had no `local_name`; the entry was skipped.
	MissingLocalName {
		/// The type key of the skipped entry.
		type_name: String,
	},
	/// A fallback object had no `local_name`; the fallback was skipped.
	MissingFallbackLocalName {
		/// The type key owning the fallback list.
		type_name: String,
		/// Position of the skipped element in the fallback array.
		position: usize,
	},
	/// Verification in `warn` mode found types unknown to the index.
	MissingTypes {
		/// The unknown types, in document order.
		types: Vec<String>,
	},
}

impl fmt::Display for RegistryWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RegistryWarning::MissingLocalName { type_name } => {
				write!(f, "failed parsing local name for type {type_name}")
			}
			RegistryWarning::MissingFallbackLocalName {
				type_name,
				position,
			} => {
				write!(
					f,
					"failed parsing fallback local name #{position} for type {type_name}"
				)
			}
			RegistryWarning::MissingTypes { types } => f.write_str(&missing_types_message(types)),
		}
	}
}

/// Formats the missing-types listing shared by warn and strict verification.
pub(crate) fn missing_types_message(types: &[String]) -> String {
	match types {
		[single] => format!("the following simple type field name type is missing: {single}"),
		_ => {
			let mut message = String::from("the following simple type field name types are missing:");
			for ty in types {
				message.push_str("\n\t");
				message.push_str(ty);
			}
			message
		}
	}
}
