//! RevisionMetadataWithType - Revision metadata tagged with its change type
//!
//! Wraps metadata owned elsewhere (shared, never mutated) and adds the
//! created/modified/deleted classification. Every metadata query is
//! forwarded to the wrapped value unchanged.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;

use super::errors::{HistoryError, HistoryResult};
use super::metadata::{DefaultRevisionMetadata, RevisionDelegate, RevisionMetadata};
use super::{RevisionNumber, RevisionType};
use crate::observability::{log_event_with_fields, Event};

/// Revision metadata together with the kind of change it recorded.
///
/// Immutable after construction.
#[derive(Debug)]
pub struct RevisionMetadataWithType<M = DefaultRevisionMetadata> {
    revision_metadata: Arc<M>,
    revision_type: RevisionType,
}

impl<M: RevisionMetadata> RevisionMetadataWithType<M> {
    /// Wraps `revision_metadata` with the given change type.
    pub fn new(revision_metadata: M, revision_type: RevisionType) -> Self {
        Self::shared(Arc::new(revision_metadata), revision_type)
    }

    /// Wraps metadata that is already shared with other holders.
    pub fn shared(revision_metadata: Arc<M>, revision_type: RevisionType) -> Self {
        Self {
            revision_metadata,
            revision_type,
        }
    }

    /// Builds from values that may be missing at the provider boundary.
    ///
    /// Fails with `InvalidArgument` if either part is absent.
    pub fn from_parts(
        revision_metadata: Option<Arc<M>>,
        revision_type: Option<RevisionType>,
    ) -> HistoryResult<Self> {
        let revision_metadata = revision_metadata.ok_or_else(|| reject("revision_metadata"))?;
        let revision_type = revision_type.ok_or_else(|| reject("revision_type"))?;

        Ok(Self {
            revision_metadata,
            revision_type,
        })
    }

    /// Returns the kind of change this revision recorded.
    #[inline]
    pub fn revision_type(&self) -> RevisionType {
        self.revision_type
    }

    /// Returns the wrapped metadata.
    #[inline]
    pub fn metadata(&self) -> &M {
        &self.revision_metadata
    }
}

fn reject(argument: &str) -> HistoryError {
    log_event_with_fields(
        Event::RevisionRejected,
        &[("argument", argument), ("type", "RevisionMetadataWithType")],
    );
    HistoryError::missing(argument)
}

impl<M: RevisionMetadata> RevisionMetadata for RevisionMetadataWithType<M> {
    #[inline]
    fn revision_number(&self) -> RevisionNumber {
        self.revision_metadata.revision_number()
    }

    #[inline]
    fn revision_date(&self) -> NaiveDateTime {
        self.revision_metadata.revision_date()
    }

    #[inline]
    fn delegate(&self) -> &RevisionDelegate {
        self.revision_metadata.delegate()
    }
}

impl<M> Clone for RevisionMetadataWithType<M> {
    fn clone(&self) -> Self {
        Self {
            revision_metadata: Arc::clone(&self.revision_metadata),
            revision_type: self.revision_type,
        }
    }
}

impl<M: RevisionMetadata> fmt::Display for RevisionMetadataWithType<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RevisionMetadataWithType[revision={}, date={}, type={}]",
            self.revision_number(),
            self.revision_date().format("%Y-%m-%dT%H:%M:%S%.3f"),
            self.revision_type
        )
    }
}
