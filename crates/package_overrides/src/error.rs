use std::fmt;
use std::path::PathBuf;

use namesake_entry::{ClassEntry, DocumentError, SegmentRule};

/// One broken segment rule in an override document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideViolation {
	pub class: ClassEntry,
	pub segment: String,
	pub rule: SegmentRule,
}

impl fmt::Display for OverrideViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} ({:?})", self.class, self.rule, self.segment)
	}
}

/// Every violation found in one pass over an override document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", format_violations(.violations))]
pub struct InvalidOverrides {
	pub violations: Vec<OverrideViolation>,
}

fn format_violations(violations: &[OverrideViolation]) -> String {
	let mut message = format!("invalid package overrides ({}):", violations.len());
	for violation in violations {
		message.push_str("\n\t");
		message.push_str(&violation.to_string());
	}
	message
}

/// Override document errors.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
	#[error("I/O error on {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("parse error: {0}")]
	Parse(serde_json::Error),

	#[error("duplicate class {0}")]
	DuplicateClass(String),

	#[error(transparent)]
	Invalid(#[from] InvalidOverrides),
}

impl From<DocumentError> for OverrideError {
	fn from(error: DocumentError) -> Self {
		match error {
			DocumentError::Io { path, error } => OverrideError::Io { path, error },
			DocumentError::Parse(error) => OverrideError::Parse(error),
			DocumentError::DuplicateKey(key) => OverrideError::DuplicateClass(key),
		}
	}
}

pub type Result<T> = std::result::Result<T, OverrideError>;
