//! Merging overrides with the authoritative tree.
//!
//! Each top-level class with a proposed name is placed once, at bulk load:
//!
//! 1. An override entry places the class in the override's package
//!    ([`Provenance::UserOverride`]).
//! 2. Otherwise the class keeps the authoritative package
//!    ([`Provenance::JarProposed`]).
//!
//! The simple name always comes from the authoritative tree. Overridden
//! classes are attached to a [`PackageTree`], and each package node is owned
//! by the smallest class placed directly in it.
//!
//! When the owner of a package is renamed into a different package, the
//! package node moves with it and every class below it is re-derived in the
//! same call. Other renames only change the renamed class, whose proposal is
//! re-derived from its placement with the new simple name.

use indexmap::IndexMap;
use namesake_entry::name::split_package;
use rustc_hash::FxHashSet as HashSet;
use namesake_entry::{ClassEntry, Entry, MappingTree, ProposedName, ProposedNames, Provenance};
use tracing::{debug, warn};

use crate::error::InvalidOverrides;
use crate::path::PackagePath;
use crate::store::OverrideDocument;
use crate::tree::{PackageId, PackageTree};


#[derive(Clone, Debug)]
struct Placement {
	/// Set for overridden classes only.
	package: Option<PackageId>,
	/// Authoritative package of a class without an override.
	jar_package: Option<String>,
	simple_name: String,
	provenance: Provenance,
}

/// Live merge state of one override document over one authoritative tree.
#[derive(Clone, Debug)]
pub struct OverrideMerge {
	packages: PackageTree,
	placements: IndexMap<ClassEntry, Placement>,
	/// Classes renamed live; their proposals stay [`Provenance::UserOverride`].
	renamed: HashSet<ClassEntry>,
}

impl OverrideMerge {
	/// Validates `overrides` and places every top-level class of `mappings`.
	///
	/// Nothing is built when any override is invalid.
	pub fn new(overrides: &OverrideDocument, mappings: &MappingTree) -> Result<Self, InvalidOverrides> {
		overrides.validate()?;

		let mut packages = PackageTree::new();
		let mut placements = IndexMap::new();

		for (class, node) in mappings.classes() {
			let Some(target) = node.target_name() else {
				continue;
			};
			let (jar_package, simple_name) = split_package(target);

			let placement = match overrides.get(class) {
				Some(path) => {
					let package = packages.ensure(path);
					if let Some(id) = package {
						packages.attach_class(id, class.clone());
					}
					Placement {
						package,
						jar_package: None,
						simple_name: simple_name.to_string(),
						provenance: Provenance::UserOverride,
					}
				}
				None => Placement {
					package: None,
					jar_package: jar_package.map(str::to_string),
					simple_name: simple_name.to_string(),
					provenance: Provenance::JarProposed,
				},
			};
			placements.insert(class.clone(), placement);
		}

		let mut owners: Vec<(&ClassEntry, PackageId)> = placements
			.iter()
			.filter_map(|(class, placement)| placement.package.map(|id| (class, id)))
			.collect();
		owners.sort();
		for (class, id) in owners {
			packages.claim(id, class);
		}

		for (class, _) in overrides.iter() {
			if !placements.contains_key(class) {
				warn!(class = %class, "override for class without a proposed name");
			}
		}

		debug!(
			classes = placements.len(),
			packages = packages.len(),
			"placed override classes"
		);
		Ok(Self {
			packages,
			placements,
			renamed: HashSet::default(),
		})
	}

	/// The proposed full name of a placed class.
	pub fn proposed_name(&self, class: &ClassEntry) -> Option<String> {
		let placement = self.placements.get(class)?;
		Some(self.full_name(placement))
	}

	fn full_name(&self, placement: &Placement) -> String {
		match (placement.package, &placement.jar_package) {
			(Some(id), _) => self.packages.path(id).class_name(&placement.simple_name),
			(None, Some(package)) => format!("{package}/{}", placement.simple_name),
			(None, None) => placement.simple_name.clone(),
		}
	}

	/// Offers the name of every placed class to `names`.
	pub fn insert_proposed_names(&self, names: &mut ProposedNames) {
		for (class, placement) in &self.placements {
			names.offer(
				Entry::Class(class.clone()),
				ProposedName::new(self.full_name(placement), placement.provenance),
			);
		}
	}

	/// Reacts to a live rename of `class` to `new_target`.
	///
	/// Returns every class whose proposal changed, the renamed class first.
	/// Inner and unplaced classes are ignored.
	pub fn on_rename(
		&mut self,
		class: &ClassEntry,
		new_target: &str,
		names: &mut ProposedNames,
	) -> Vec<ClassEntry> {
		if class.is_inner() {
			return Vec::new();
		}
		let Some(placement) = self.placements.get_mut(class) else {
			return Vec::new();
		};

		let (new_package, new_simple) = split_package(new_target);
		placement.simple_name = new_simple.to_string();
		let package = placement.package;
		self.renamed.insert(class.clone());

		let mut changed = vec![class.clone()];
		if let Some(id) = package
			&& self.packages.owner(id) == Some(class)
		{
			self.move_package(class, id, new_package.unwrap_or_default(), names, &mut changed);
		}

		if let Some(placement) = self.placements.get(class) {
			names.insert(
				Entry::Class(class.clone()),
				ProposedName::new(self.full_name(placement), Provenance::UserOverride),
			);
		}
		changed
	}

	/// Moves the package owned by `class` and re-derives every other class
	/// below it. Refused moves leave the tree untouched.
	fn move_package(
		&mut self,
		class: &ClassEntry,
		id: PackageId,
		new_package: &str,
		names: &mut ProposedNames,
		changed: &mut Vec<ClassEntry>,
	) {
		let destination = PackagePath::parse(new_package);
		let violations = destination.violations();
		if !violations.is_empty() {
			for (segment, rule) in violations {
				warn!(class = %class, segment, %rule, "refusing package rename");
			}
			return;
		}

		match self.packages.move_to(id, &destination) {
			Ok(true) => {}
			Ok(false) => return,
			Err(refused) => {
				warn!(class = %class, error = %refused, "refusing package rename");
				return;
			}
		}

		let before = changed.len();
		for node in self.packages.subtree(id) {
			let prefix = self.packages.path(node);
			for moved in self.packages.classes(node) {
				if moved == class {
					continue;
				}
				let Some(placement) = self.placements.get(moved) else {
					continue;
				};
				let provenance = if self.renamed.contains(moved) {
					Provenance::UserOverride
				} else {
					Provenance::Inherited
				};
				names.insert(
					Entry::Class(moved.clone()),
					ProposedName::new(prefix.class_name(&placement.simple_name), provenance),
				);
				changed.push(moved.clone());
			}
		}

		debug!(class = %class, to = %destination, rederived = changed.len() - before, "moved package");
	}
}
