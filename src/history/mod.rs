//! Typed revision history
//!
//! Value types that tag revision metadata from a history provider with the
//! kind of change it recorded, and pair it with the entity state captured
//! at that revision.
//!
//! This module provides:
//! - `RevisionNumber` - Totally ordered revision identity
//! - `RevisionType` - Created / modified / deleted classification
//! - `RevisionMetadata` - Provider metadata access, with `DefaultRevisionMetadata`
//! - `RevisionMetadataWithType` - Metadata tagged with its change type
//! - `RevisionWithType` - Entity snapshot at a typed revision
//! - `Revisions` - Sorted history of one entity
//! - `HistoryConfig` - History assembly configuration
//!
//! All types are immutable after construction and safe to share across
//! threads.

mod config;
mod errors;
mod metadata;
mod metadata_with_type;
mod revision_number;
mod revision_type;
mod revision_with_type;
mod revisions;

pub use config::{HistoryConfig, RevisionSort};
pub use errors::{HistoryError, HistoryErrorCode, HistoryResult};
pub use metadata::{
    DefaultRevisionEntity, DefaultRevisionMetadata, RevisionDelegate, RevisionMetadata,
};
pub use metadata_with_type::RevisionMetadataWithType;
pub use revision_number::RevisionNumber;
pub use revision_type::RevisionType;
pub use revision_with_type::RevisionWithType;
pub use revisions::Revisions;
