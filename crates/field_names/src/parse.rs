//! Conversion of raw document values into registry entries.
//!
//! A value is either a bare string (the local name, static form derived) or
//! an object with `local_name`, `static_name`, `exclusive`, `inherit` and
//! `fallback`. Anything else is skipped. Fallback elements follow the same
//! string-or-object rule, without `exclusive`/`inherit`.

use namesake_entry::Name;
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::RegistryEntry;
use crate::error::RegistryWarning;

/// Reserved key naming the document schema.
pub(crate) const SCHEMA_KEY: &str = "$schema";

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawValue {
	Shorthand(String),
	Full(RawEntry),
	Other(IgnoredAny),
}

#[derive(Deserialize)]
pub(crate) struct RawEntry {
	local_name: Option<String>,
	static_name: Option<String>,
	#[serde(default)]
	exclusive: bool,
	#[serde(default)]
	inherit: bool,
	#[serde(default)]
	fallback: Vec<RawName>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawName {
	Shorthand(String),
	Full(RawNameObject),
	Other(IgnoredAny),
}

#[derive(Deserialize)]
pub(crate) struct RawNameObject {
	local_name: Option<String>,
	static_name: Option<String>,
}

/// Converts one top-level value; `None` means the value was skipped.
pub(crate) fn parse_entry(
	type_name: &str,
	value: RawValue,
	warnings: &mut Vec<RegistryWarning>,
) -> Option<RegistryEntry> {
	match value {
		RawValue::Shorthand(local) => Some(RegistryEntry::shorthand(type_name, local)),
		RawValue::Full(raw) => {
			let Some(local) = raw.local_name else {
				tracing::error!(type_name, "failed parsing local name");
				warnings.push(RegistryWarning::MissingLocalName {
					type_name: type_name.to_string(),
				});
				return None;
			};

			let fallback = raw
				.fallback
				.into_iter()
				.enumerate()
				.filter_map(|(position, name)| parse_fallback(type_name, position, name, warnings))
				.collect();

			Some(RegistryEntry {
				type_name: type_name.to_string(),
				name: make_name(local, raw.static_name),
				exclusive: raw.exclusive,
				inherit: raw.inherit,
				fallback,
			})
		}
		RawValue::Other(_) => {
			tracing::debug!(type_name, "skipping registry value of unsupported shape");
			None
		}
	}
}

fn parse_fallback(
	type_name: &str,
	position: usize,
	name: RawName,
	warnings: &mut Vec<RegistryWarning>,
) -> Option<Name> {
	match name {
		RawName::Shorthand(local) => Some(Name::derived(local)),
		RawName::Full(RawNameObject {
			local_name: Some(local),
			static_name,
		}) => Some(make_name(local, static_name)),
		RawName::Full(RawNameObject {
			local_name: None, ..
		}) => {
			tracing::error!(type_name, position, "failed parsing fallback local name");
			warnings.push(RegistryWarning::MissingFallbackLocalName {
				type_name: type_name.to_string(),
				position,
			});
			None
		}
		RawName::Other(_) => None,
	}
}

fn make_name(local: String, static_name: Option<String>) -> Name {
	match static_name {
		Some(static_name) => Name::new(local, static_name),
		None => Name::derived(local),
	}
}
