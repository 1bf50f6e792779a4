//! revhistory - Typed revision history values
//!
//! Tags revision metadata from a history provider with the kind of change
//! it recorded (created, modified, deleted) and pairs it with the entity
//! state captured at that revision.

pub mod history;
pub mod observability;

pub use history::{
    DefaultRevisionEntity, DefaultRevisionMetadata, HistoryConfig, HistoryError, HistoryErrorCode,
    HistoryResult, RevisionDelegate, RevisionMetadata, RevisionMetadataWithType, RevisionNumber,
    RevisionSort, RevisionType, RevisionWithType, Revisions,
};
