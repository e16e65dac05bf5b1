//! Package overrides layered over an authoritative naming tree.
//!
//! An override document maps obfuscated top-level classes to the package
//! they should live in:
//!
//! ```json
//! {
//! 	"a": "a",
//! 	"b": "a/b_",
//! 	"c": ["b_", "a"]
//! }
//! ```
//!
//! [`OverrideDocument`] reads, writes and maintains these documents.
//! [`OverrideMerge`] combines one with a [`MappingTree`] into proposed class
//! names and keeps them consistent while classes are renamed live.
//!
//! [`MappingTree`]: namesake_entry::MappingTree

pub mod engine;
pub mod error;
pub mod path;
pub mod store;
pub mod tree;

pub use engine::OverrideMerge;
pub use error::{InvalidOverrides, OverrideError, OverrideViolation, Result};
pub use path::PackagePath;
pub use store::OverrideDocument;
pub use tree::{MoveRefused, PackageId, PackageTree};
