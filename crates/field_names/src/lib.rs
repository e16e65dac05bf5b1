//! Type-keyed field name registry.
//!
//! The registry maps a fully-qualified obfuscated type to the name its single
//! significant field should take. The backing document is a JSON object:
//!
//! ```json
//! {
//!   "$schema": "./field_names.schema.json",
//!   "net/example/BlockPos": "pos",
//!   "net/example/Entity": {
//!     "local_name": "entity",
//!     "inherit": true,
//!     "fallback": ["target", { "local_name": "owner", "static_name": "OWNER" }]
//!   }
//! }
//! ```
//!
//! A bare string is shorthand for a name whose static form is derived. The
//! object form adds `static_name`, `exclusive`, `inherit` and an ordered
//! `fallback` list. Hierarchy walking lives in [`TypeResolver`], per-class
//! assignment in [`assign_field_names`].

pub mod assign;
pub mod error;
mod parse;
pub mod registry;
pub mod resolve;

pub use assign::{FieldName, assign_field_names};
pub use error::{RegistryError, RegistryWarning, Result};
pub use registry::{FieldNameRegistry, RegistryEntry, TypeVerification};
pub use resolve::TypeResolver;
