//! RevisionWithType - An entity snapshot at a typed revision
//!
//! Pairs a point-in-time entity snapshot with the metadata of the revision
//! that produced it.
//!
//! Ordering and equality use different fields:
//! - Ordering looks at the revision number only
//! - Equality looks at the revision number AND the entity
//!
//! Because of that split there is no `Ord` impl. Histories are sorted with
//! [`RevisionWithType::compare_to`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;

use super::errors::{HistoryError, HistoryResult};
use super::metadata::{DefaultRevisionMetadata, RevisionMetadata};
use super::{RevisionMetadataWithType, RevisionNumber, RevisionType};
use crate::observability::{log_event_with_fields, Event};

/// An entity snapshot together with its typed revision metadata.
#[derive(Debug)]
pub struct RevisionWithType<T, M = DefaultRevisionMetadata> {
    metadata: RevisionMetadataWithType<M>,
    entity: T,
}

impl<T, M: RevisionMetadata> RevisionWithType<T, M> {
    /// Creates a revision from its metadata and the entity state it captured.
    pub fn new(metadata: RevisionMetadataWithType<M>, entity: T) -> Self {
        Self { metadata, entity }
    }

    /// Builds from values that may be missing at the provider boundary.
    ///
    /// Fails with `InvalidArgument` if either part is absent.
    pub fn from_parts(
        metadata: Option<RevisionMetadataWithType<M>>,
        entity: Option<T>,
    ) -> HistoryResult<Self> {
        let metadata = metadata.ok_or_else(|| reject("metadata"))?;
        let entity = entity.ok_or_else(|| reject("entity"))?;

        Ok(Self { metadata, entity })
    }

    #[inline]
    pub fn revision_number(&self) -> RevisionNumber {
        self.metadata.revision_number()
    }

    #[inline]
    pub fn revision_date(&self) -> NaiveDateTime {
        self.metadata.revision_date()
    }

    #[inline]
    pub fn revision_type(&self) -> RevisionType {
        self.metadata.revision_type()
    }

    /// Returns the entity snapshot.
    #[inline]
    pub fn entity(&self) -> &T {
        &self.entity
    }

    /// Returns the typed revision metadata.
    #[inline]
    pub fn metadata(&self) -> &RevisionMetadataWithType<M> {
        &self.metadata
    }

    /// Consumes the revision, returning the entity snapshot.
    pub fn into_entity(self) -> T {
        self.entity
    }

    /// Orders by revision number, ascending.
    ///
    /// Entities are not consulted, so two revisions with the same number
    /// compare `Equal` even when their snapshots differ.
    pub fn compare_to<U, N: RevisionMetadata>(&self, other: &RevisionWithType<U, N>) -> Ordering {
        self.revision_number().cmp(&other.revision_number())
    }
}

fn reject(argument: &str) -> HistoryError {
    log_event_with_fields(
        Event::RevisionRejected,
        &[("argument", argument), ("type", "RevisionWithType")],
    );
    HistoryError::missing(argument)
}

impl<T: Clone, M> Clone for RevisionWithType<T, M> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata.clone(),
            entity: self.entity.clone(),
        }
    }
}

impl<T: PartialEq, M: RevisionMetadata> PartialEq for RevisionWithType<T, M> {
    fn eq(&self, other: &Self) -> bool {
        self.revision_number() == other.revision_number() && self.entity == other.entity
    }
}

impl<T: Eq, M: RevisionMetadata> Eq for RevisionWithType<T, M> {}

// Same field set as `eq`.
impl<T: Hash, M: RevisionMetadata> Hash for RevisionWithType<T, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.revision_number().hash(state);
        self.entity.hash(state);
    }
}

impl<T: fmt::Display, M: RevisionMetadata> fmt::Display for RevisionWithType<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Revision {} of entity {} - Revision metadata {}",
            self.revision_number(),
            self.entity,
            self.metadata
        )
    }
}
