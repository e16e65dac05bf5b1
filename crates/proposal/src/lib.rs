//! Name proposal for obfuscated programs.
//!
//! Several sources propose names for the same entries:
//!
//! - [`FieldNameProposer`] names fields after their declared type
//! - [`MappingTreeProposer`] applies the authoritative mapping tree
//! - [`PackageOverrideProposer`] moves classes into user-chosen packages
//!
//! A [`ProposerPipeline`] runs them in a fixed order and settles conflicts
//! by provenance. A [`NamingSession`] layers live user mappings on top and
//! feeds every rename back through the pipeline.

pub mod config;
pub mod error;
pub mod field_names;
pub mod mappings;
pub mod overrides;
pub mod pipeline;
pub mod proposer;
pub mod session;

pub use config::{FieldNamesConfig, PipelineConfig, SourceConfig};
pub use error::{ProposalError, Result};
pub use field_names::FieldNameProposer;
pub use mappings::MappingTreeProposer;
pub use overrides::PackageOverrideProposer;
pub use pipeline::ProposerPipeline;
pub use proposer::{NameProposer, RenameEvent};
pub use session::NamingSession;
