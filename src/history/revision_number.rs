//! RevisionNumber - Totally ordered revision identity
//!
//! The history provider assigns every captured revision an increasing
//! integer identifier. Ordering of revisions is defined by this number only,
//! never by the revision timestamp.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer revision identifier assigned by the history provider.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionNumber(i32);

impl RevisionNumber {
    /// Creates a new RevisionNumber with the given value.
    #[inline]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for RevisionNumber {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for RevisionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
