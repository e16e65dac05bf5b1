use std::path::PathBuf;

use namesake_field_names::RegistryError;
use namesake_package_overrides::{InvalidOverrides, OverrideError};
use thiserror::Error;

/// Errors raised while building or running a proposer pipeline.
#[derive(Debug, Error)]
pub enum ProposalError {
	/// Error reading the pipeline configuration.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the configuration file.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The pipeline configuration is not well-formed.
	#[error("invalid pipeline config: {0}")]
	Config(serde_json::Error),

	/// The field name registry could not be loaded.
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// The override document could not be loaded or applied.
	#[error(transparent)]
	Overrides(#[from] OverrideError),
}

impl From<InvalidOverrides> for ProposalError {
	fn from(error: InvalidOverrides) -> Self {
		ProposalError::Overrides(error.into())
	}
}

/// Result type for proposal operations.
pub type Result<T> = std::result::Result<T, ProposalError>;
