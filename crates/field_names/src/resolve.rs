//! Hierarchy-aware registry resolution.
//!
//! The [`TypeResolver`] resolves a field type to a [`RegistryEntry`] by
//! walking the type hierarchy reported by an [`EntryIndex`].
//!
//! # Resolution Order
//!
//! 1. The type's own entry
//! 2. The nearest supertype entry with `inherit` set, breadth-first
//!
//! A supertype entry without `inherit` ends the walk along that branch:
//! types above it are not consulted through it.

use std::collections::VecDeque;

use namesake_entry::{ClassEntry, EntryIndex};
use rustc_hash::FxHashSet as HashSet;

use crate::{FieldNameRegistry, RegistryEntry};


/// Resolves types against a registry and a class hierarchy.
///
/// The resolver is stateless and cheap to create per resolution pass.
pub struct TypeResolver<'a, I: ?Sized> {
	registry: &'a FieldNameRegistry,
	index: &'a I,
}

impl<'a, I: EntryIndex + ?Sized> TypeResolver<'a, I> {
	pub fn new(registry: &'a FieldNameRegistry, index: &'a I) -> Self {
		Self { registry, index }
	}

	pub fn registry(&self) -> &'a FieldNameRegistry {
		self.registry
	}

	pub fn index(&self) -> &'a I {
		self.index
	}

	/// Resolves `ty` through the hierarchy.
	pub fn resolve(&self, ty: &ClassEntry) -> Option<&'a RegistryEntry> {
		if let Some(entry) = self.registry.get(ty.full_name()) {
			return Some(entry);
		}

		let mut seen = HashSet::default();
		seen.insert(ty.clone());
		let mut queue: VecDeque<ClassEntry> = self.index.super_types(ty).into();

		while let Some(next) = queue.pop_front() {
			if !seen.insert(next.clone()) {
				continue;
			}
			match self.registry.get(next.full_name()) {
				Some(entry) if entry.inherit => return Some(entry),
				Some(_) => {}
				None => queue.extend(self.index.super_types(&next)),
			}
		}

		None
	}
}
