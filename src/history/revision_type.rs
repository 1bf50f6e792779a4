//! RevisionType - What kind of change produced a revision
//!
//! The provider stores the change type as a compact code:
//! - 0: the entity was created
//! - 1: the entity was modified
//! - 2: the entity was deleted

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{HistoryError, HistoryResult};

/// Classification of the change recorded by a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RevisionType {
    /// The entity was created in this revision.
    Add,
    /// The entity was modified in this revision.
    Mod,
    /// The entity was deleted in this revision.
    Del,
}

impl RevisionType {
    /// Decodes the provider's compact representation.
    pub fn from_representation(code: u8) -> HistoryResult<Self> {
        match code {
            0 => Ok(RevisionType::Add),
            1 => Ok(RevisionType::Mod),
            2 => Ok(RevisionType::Del),
            other => Err(HistoryError::UnknownRevisionType(other)),
        }
    }

    /// Returns the provider's compact representation.
    pub fn representation(&self) -> u8 {
        match self {
            RevisionType::Add => 0,
            RevisionType::Mod => 1,
            RevisionType::Del => 2,
        }
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RevisionType::Add => "ADD",
            RevisionType::Mod => "MOD",
            RevisionType::Del => "DEL",
        }
    }

    /// Returns true if the revision removed the entity.
    #[inline]
    pub fn is_deletion(&self) -> bool {
        matches!(self, RevisionType::Del)
    }
}

impl TryFrom<u8> for RevisionType {
    type Error = HistoryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_representation(code)
    }
}

impl fmt::Display for RevisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
