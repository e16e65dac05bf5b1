//! Ordered object documents.
//!
//! [`OrderedDocument`] reads the top-level object of a document as a forward
//! stream of key/value pairs, keeping source order and every occurrence of a
//! key. [`OrderedDocument::into_unique`] then builds an insertion-ordered map
//! and rejects the first key seen twice, instead of letting the last write
//! win as a plain map deserializer would.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{DocumentError, Result};

#[cfg(test)]
mod tests;

/// Key/value pairs of a top-level object, in source order.
///
/// A top-level value that is not an object reads as an empty document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedDocument<T> {
	entries: Vec<(String, T)>,
}

impl<T> OrderedDocument<T> {
	pub fn entries(&self) -> &[(String, T)] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Drops every occurrence of `key`, so a repeated metadata key never
	/// reaches [`Self::into_unique`].
	pub fn without_key(mut self, key: &str) -> Self {
		self.entries.retain(|(name, _)| name != key);
		self
	}

	/// Collects the pairs into an insertion-ordered map.
	///
	/// Fails with [`DocumentError::DuplicateKey`] on the first repeated key.
	pub fn into_unique(self) -> Result<IndexMap<String, T>> {
		let mut map = IndexMap::with_capacity(self.entries.len());
		for (key, value) in self.entries {
			match map.entry(key) {
				MapEntry::Occupied(occupied) => {
					return Err(DocumentError::DuplicateKey(occupied.key().clone()));
				}
				MapEntry::Vacant(vacant) => {
					vacant.insert(value);
				}
			}
		}
		Ok(map)
	}
}

impl<T: DeserializeOwned> OrderedDocument<T> {
	pub fn parse(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	pub fn read(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| DocumentError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedDocument<T> {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(OrderedVisitor(PhantomData))
	}
}

struct OrderedVisitor<T>(PhantomData<T>);

impl<T> OrderedVisitor<T> {
	fn empty<E>() -> std::result::Result<OrderedDocument<T>, E> {
		Ok(OrderedDocument {
			entries: Vec::new(),
		})
	}
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
	type Value = OrderedDocument<T>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("an object")
	}

	fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
		while let Some((key, value)) = map.next_entry::<String, T>()? {
			entries.push((key, value));
		}
		Ok(OrderedDocument { entries })
	}

	fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		while seq.next_element::<IgnoredAny>()?.is_some() {}
		Self::empty()
	}

	fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Self::Value, E> {
		Self::empty()
	}

	fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
		Self::empty()
	}

	fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
		Self::empty()
	}

	fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
		Self::empty()
	}

	fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
		Self::empty()
	}

	fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
		Self::empty()
	}
}
