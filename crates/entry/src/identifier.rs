//! Package segment legality.
//!
//! A package segment must be non-empty, must not start with a digit, and
//! must not contain whitespace, `/`, `-` or uppercase letters. Uppercase
//! is reserved for class names.

use std::fmt;


/// A rule a package segment can break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentRule {
	Empty,
	LeadingDigit,
	Space,
	Slash,
	Hyphen,
	Uppercase,
}

impl fmt::Display for SegmentRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			SegmentRule::Empty => "segment is empty",
			SegmentRule::LeadingDigit => "segment starts with a digit",
			SegmentRule::Space => "segment contains a space",
			SegmentRule::Slash => "segment contains a slash",
			SegmentRule::Hyphen => "segment contains a hyphen",
			SegmentRule::Uppercase => "segment contains an uppercase letter",
		})
	}
}

/// Returns every rule `segment` breaks, in [`SegmentRule`] order.
pub fn segment_violations(segment: &str) -> Vec<SegmentRule> {
	let mut violations = Vec::new();

	let Some(first) = segment.chars().next() else {
		violations.push(SegmentRule::Empty);
		return violations;
	};

	if first.is_ascii_digit() {
		violations.push(SegmentRule::LeadingDigit);
	}
	if segment.chars().any(char::is_whitespace) {
		violations.push(SegmentRule::Space);
	}
	if segment.contains('/') {
		violations.push(SegmentRule::Slash);
	}
	if segment.contains('-') {
		violations.push(SegmentRule::Hyphen);
	}
	if segment.chars().any(char::is_uppercase) {
		violations.push(SegmentRule::Uppercase);
	}

	violations
}

pub fn is_valid_package_segment(segment: &str) -> bool {
	segment_violations(segment).is_empty()
}
