//! Pipeline configuration.
//!
//! ```json
//! {
//!   "field_names": { "path": "field_names.json", "verification": "strict" },
//!   "mappings": { "path": "mappings.json" },
//!   "package_overrides": { "path": "package_overrides.json" }
//! }
//! ```
//!
//! Every section is optional and an absent section disables its proposer.
//! Relative paths in a loaded file resolve against the file's directory.

use std::path::{Path, PathBuf};

use namesake_field_names::TypeVerification;
use serde::Deserialize;

use crate::error::{ProposalError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
	#[serde(default)]
	pub field_names: Option<FieldNamesConfig>,
	#[serde(default)]
	pub mappings: Option<SourceConfig>,
	#[serde(default)]
	pub package_overrides: Option<SourceConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldNamesConfig {
	pub path: PathBuf,
	#[serde(default)]
	pub verification: TypeVerification,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
	pub path: PathBuf,
}

impl PipelineConfig {
	pub fn parse(input: &str) -> Result<Self> {
		serde_json::from_str(input).map_err(ProposalError::Config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ProposalError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let mut config = Self::parse(&content)?;
		if let Some(base) = path.parent() {
			config.rebase(base);
		}
		Ok(config)
	}

	fn rebase(&mut self, base: &Path) {
		let paths = [
			self.field_names.as_mut().map(|section| &mut section.path),
			self.mappings.as_mut().map(|section| &mut section.path),
			self.package_overrides.as_mut().map(|section| &mut section.path),
		];
		for path in paths.into_iter().flatten() {
			if path.is_relative() {
				*path = base.join(&*path);
			}
		}
	}
}
