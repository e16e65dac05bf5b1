use std::fmt;

use namesake_entry::{SegmentRule, segment_violations};
use serde::{Deserialize, Serialize, Serializer};

/// A package path as an ordered list of segments.
///
/// Documents may spell a path as a `/`-separated string or as an array of
/// segments. It is always written back as a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawPath")]
pub struct PackagePath {
	segments: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPath {
	Joined(String),
	Segments(Vec<String>),
}

impl From<RawPath> for PackagePath {
	fn from(raw: RawPath) -> Self {
		match raw {
			RawPath::Joined(path) => PackagePath::parse(&path),
			RawPath::Segments(segments) => PackagePath { segments },
		}
	}
}

impl PackagePath {
	/// Splits `a/b_/c` into its segments. Empty segments are kept so that
	/// validation can report them.
	pub fn parse(path: &str) -> Self {
		Self {
			segments: path.split('/').map(str::to_string).collect(),
		}
	}

	pub fn from_segments<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			segments: segments.into_iter().map(Into::into).collect(),
		}
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn last(&self) -> Option<&str> {
		self.segments.last().map(String::as_str)
	}

	/// The path without its last segment, or `None` for a single segment.
	pub fn parent(&self) -> Option<PackagePath> {
		match self.segments.split_last() {
			Some((_, parent)) if !parent.is_empty() => Some(Self {
				segments: parent.to_vec(),
			}),
			_ => None,
		}
	}

	/// Joins a simple class name onto the path: `a/b_` + `B` -> `a/b_/B`.
	pub fn class_name(&self, simple_name: &str) -> String {
		if self.segments.is_empty() {
			return simple_name.to_string();
		}
		format!("{self}/{simple_name}")
	}

	/// Every rule broken by a segment, paired with that segment. A path
	/// without segments is reported as one empty segment.
	pub fn violations(&self) -> Vec<(&str, SegmentRule)> {
		if self.segments.is_empty() {
			return vec![("", SegmentRule::Empty)];
		}
		self.segments
			.iter()
			.flat_map(|segment| {
				segment_violations(segment)
					.into_iter()
					.map(move |rule| (segment.as_str(), rule))
			})
			.collect()
	}
}

impl fmt::Display for PackagePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("/"))
	}
}

impl Serialize for PackagePath {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}
