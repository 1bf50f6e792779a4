//! Revision metadata supplied by the history provider
//!
//! A provider describes each captured revision with a number, a timestamp
//! and the raw record it was read from (the delegate). The delegate is a
//! tagged union rather than an arbitrary type: callers either match on it or
//! ask for it to be decoded into a shape they name.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::{HistoryError, HistoryResult};
use super::RevisionNumber;

/// Read access to the metadata of a single revision.
pub trait RevisionMetadata {
    /// The provider-assigned revision number.
    fn revision_number(&self) -> RevisionNumber;

    /// When the revision was captured, in UTC.
    fn revision_date(&self) -> NaiveDateTime;

    /// The raw provider record behind this metadata.
    fn delegate(&self) -> &RevisionDelegate;

    /// Decodes the delegate into a caller-chosen shape.
    fn delegate_as<D>(&self) -> HistoryResult<D>
    where
        Self: Sized,
        D: DeserializeOwned,
    {
        self.delegate().decode()
    }
}

/// The provider's default revision record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefaultRevisionEntity {
    /// Revision number.
    pub id: i32,
    /// Capture time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl DefaultRevisionEntity {
    pub fn new(id: i32, timestamp: i64) -> Self {
        Self { id, timestamp }
    }

    /// Converts the millisecond timestamp to a UTC date.
    ///
    /// Returns `None` when the timestamp is outside the representable range.
    pub fn revision_date(&self) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(self.timestamp).map(|d| d.naive_utc())
    }
}

/// The raw record a revision's metadata was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum RevisionDelegate {
    /// The provider's default revision record.
    Default(DefaultRevisionEntity),
    /// A provider-specific revision record.
    Custom(serde_json::Value),
}

impl RevisionDelegate {
    /// Returns the default record, if this is one.
    pub fn as_default(&self) -> Option<&DefaultRevisionEntity> {
        match self {
            RevisionDelegate::Default(entity) => Some(entity),
            RevisionDelegate::Custom(_) => None,
        }
    }

    /// Returns the custom record, if this is one.
    pub fn as_custom(&self) -> Option<&serde_json::Value> {
        match self {
            RevisionDelegate::Default(_) => None,
            RevisionDelegate::Custom(value) => Some(value),
        }
    }

    /// Decodes the record into `D`.
    ///
    /// Fails with `InvalidArgument` when the record does not have the
    /// requested shape.
    pub fn decode<D: DeserializeOwned>(&self) -> HistoryResult<D> {
        let value = match self {
            RevisionDelegate::Default(entity) => serde_json::to_value(entity)
                .map_err(|e| HistoryError::InvalidArgument(format!("delegate: {}", e)))?,
            RevisionDelegate::Custom(value) => value.clone(),
        };

        serde_json::from_value(value)
            .map_err(|e| HistoryError::InvalidArgument(format!("delegate: {}", e)))
    }
}

/// Metadata backed by a provider record.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultRevisionMetadata {
    revision_number: RevisionNumber,
    revision_date: NaiveDateTime,
    delegate: RevisionDelegate,
}

impl DefaultRevisionMetadata {
    /// Builds metadata from the provider's default record.
    ///
    /// Fails when the record's timestamp cannot be represented as a date.
    pub fn from_entity(entity: DefaultRevisionEntity) -> HistoryResult<Self> {
        let revision_date = entity.revision_date().ok_or_else(|| {
            HistoryError::InvalidArgument(format!(
                "revision timestamp {} is out of range",
                entity.timestamp
            ))
        })?;

        Ok(Self {
            revision_number: RevisionNumber::new(entity.id),
            revision_date,
            delegate: RevisionDelegate::Default(entity),
        })
    }

    /// Builds metadata for a provider-specific record.
    pub fn with_custom_delegate(
        revision_number: RevisionNumber,
        revision_date: NaiveDateTime,
        record: serde_json::Value,
    ) -> Self {
        Self {
            revision_number,
            revision_date,
            delegate: RevisionDelegate::Custom(record),
        }
    }
}

impl RevisionMetadata for DefaultRevisionMetadata {
    #[inline]
    fn revision_number(&self) -> RevisionNumber {
        self.revision_number
    }

    #[inline]
    fn revision_date(&self) -> NaiveDateTime {
        self.revision_date
    }

    #[inline]
    fn delegate(&self) -> &RevisionDelegate {
        &self.delegate
    }
}

impl fmt::Display for DefaultRevisionMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DefaultRevisionMetadata[revision={}, date={}]",
            self.revision_number,
            self.revision_date.format("%Y-%m-%dT%H:%M:%S%.3f")
        )
    }
}
