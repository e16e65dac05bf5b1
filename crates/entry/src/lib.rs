//! Shared primitives for namesake.
//!
//! This crate holds the vocabulary every other namesake crate speaks:
//!
//! - [`Entry`] identifiers for classes, fields and methods of an obfuscated program
//! - [`Name`] pairs with their derived constant-style form
//! - the package segment validator ([`identifier`])
//! - the ordered, duplicate-rejecting document reader ([`document`])
//! - the authoritative [`MappingTree`] and its reader
//! - the [`EntryIndex`] collaborator interface
//! - the [`ProposedNames`] store that proposers write into

pub mod document;
pub mod entry;
pub mod error;
pub mod identifier;
pub mod index;
pub mod name;
pub mod proposed;
pub mod tree;

pub use document::OrderedDocument;
pub use entry::{ClassEntry, Entry, EntryKind, FieldEntry, MethodEntry};
pub use error::{DocumentError, Result};
pub use identifier::{SegmentRule, is_valid_package_segment, segment_violations};
pub use index::{EntryIndex, FieldInfo, MemoryIndex};
pub use name::Name;
pub use proposed::{ProposedName, ProposedNames, Provenance};
pub use tree::{JsonMappingReader, MappingNode, MappingReader, MappingTree};
