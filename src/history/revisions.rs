//! Revisions - An ordered revision history of one entity
//!
//! Revisions are always held sorted by revision number. The sort direction
//! decides which end holds the latest revision.

use std::slice;
use std::vec;

use super::config::{HistoryConfig, RevisionSort};
use super::errors::{HistoryError, HistoryResult};
use super::metadata::{DefaultRevisionMetadata, RevisionMetadata};
use super::RevisionWithType;
use crate::observability::{Event, Logger};

/// An immutable, sorted sequence of revisions.
#[derive(Debug)]
pub struct Revisions<T, M = DefaultRevisionMetadata> {
    revisions: Vec<RevisionWithType<T, M>>,
    sort: RevisionSort,
}

impl<T, M: RevisionMetadata> Revisions<T, M> {
    /// Creates a history sorted oldest first.
    pub fn new(revisions: Vec<RevisionWithType<T, M>>) -> Self {
        Self::sorted_by(revisions, RevisionSort::Asc)
    }

    /// Creates an empty history.
    pub fn none() -> Self {
        Self {
            revisions: Vec::new(),
            sort: RevisionSort::Asc,
        }
    }

    /// Creates a history shaped by `config`.
    ///
    /// Deletion revisions are dropped when the config excludes them.
    pub fn with_config(config: &HistoryConfig, revisions: Vec<RevisionWithType<T, M>>) -> Self {
        let revisions = if config.include_deletions {
            revisions
        } else {
            revisions
                .into_iter()
                .filter(|r| !r.revision_type().is_deletion())
                .collect()
        };
        Self::sorted_by(revisions, config.sort)
    }

    fn sorted_by(mut revisions: Vec<RevisionWithType<T, M>>, sort: RevisionSort) -> Self {
        match sort {
            RevisionSort::Asc => revisions.sort_by(|a, b| a.compare_to(b)),
            RevisionSort::Desc => revisions.sort_by(|a, b| b.compare_to(a)),
        }

        let count = revisions.len().to_string();
        Logger::trace(
            Event::RevisionsAssembled.as_str(),
            &[("count", &count), ("sort", sort_str(sort))],
        );

        Self { revisions, sort }
    }

    /// Returns the revision with the highest revision number.
    pub fn latest_revision(&self) -> Option<&RevisionWithType<T, M>> {
        match self.sort {
            RevisionSort::Asc => self.revisions.last(),
            RevisionSort::Desc => self.revisions.first(),
        }
    }

    /// Like [`Revisions::latest_revision`], failing with `NoRevisions` when empty.
    pub fn require_latest_revision(&self) -> HistoryResult<&RevisionWithType<T, M>> {
        self.latest_revision().ok_or(HistoryError::NoRevisions)
    }

    /// Returns the history in the opposite order.
    pub fn reverse(mut self) -> Self {
        self.revisions.reverse();
        self.sort = match self.sort {
            RevisionSort::Asc => RevisionSort::Desc,
            RevisionSort::Desc => RevisionSort::Asc,
        };
        self
    }

    /// Returns the history in the requested order.
    pub fn sorted(self, sort: RevisionSort) -> Self {
        if self.sort == sort {
            self
        } else {
            self.reverse()
        }
    }

    #[inline]
    pub fn sort(&self) -> RevisionSort {
        self.sort
    }

    #[inline]
    pub fn content(&self) -> &[RevisionWithType<T, M>] {
        &self.revisions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, RevisionWithType<T, M>> {
        self.revisions.iter()
    }
}

fn sort_str(sort: RevisionSort) -> &'static str {
    match sort {
        RevisionSort::Asc => "asc",
        RevisionSort::Desc => "desc",
    }
}

impl<T, M> IntoIterator for Revisions<T, M> {
    type Item = RevisionWithType<T, M>;
    type IntoIter = vec::IntoIter<RevisionWithType<T, M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.revisions.into_iter()
    }
}

impl<'a, T, M> IntoIterator for &'a Revisions<T, M> {
    type Item = &'a RevisionWithType<T, M>;
    type IntoIter = slice::Iter<'a, RevisionWithType<T, M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.revisions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{
        DefaultRevisionEntity, RevisionMetadataWithType, RevisionNumber, RevisionType,
    };

    fn revision(number: i32, kind: RevisionType) -> RevisionWithType<String> {
        let metadata =
            DefaultRevisionMetadata::from_entity(DefaultRevisionEntity::new(number, 0)).unwrap();
        RevisionWithType::new(
            RevisionMetadataWithType::new(metadata, kind),
            format!("state-{}", number),
        )
    }

    fn numbers(revisions: &Revisions<String>) -> Vec<i32> {
        revisions
            .iter()
            .map(|r| r.revision_number().value())
            .collect()
    }

    #[test]
    fn test_new_sorts_ascending() {
        let revisions = Revisions::new(vec![
            revision(3, RevisionType::Mod),
            revision(1, RevisionType::Add),
            revision(2, RevisionType::Mod),
        ]);

        assert_eq!(numbers(&revisions), vec![1, 2, 3]);
        assert_eq!(revisions.sort(), RevisionSort::Asc);
        assert_eq!(revisions.len(), 3);
    }

    #[test]
    fn test_latest_revision() {
        let revisions = Revisions::new(vec![
            revision(2, RevisionType::Mod),
            revision(9, RevisionType::Del),
            revision(1, RevisionType::Add),
        ]);

        let latest = revisions.latest_revision().unwrap();
        assert_eq!(latest.revision_number(), RevisionNumber::new(9));

        let reversed = revisions.reverse();
        assert_eq!(numbers(&reversed), vec![9, 2, 1]);
        assert_eq!(
            reversed.latest_revision().unwrap().revision_number(),
            RevisionNumber::new(9)
        );
    }

    #[test]
    fn test_empty_history() {
        let revisions: Revisions<String> = Revisions::none();

        assert!(revisions.is_empty());
        assert!(revisions.latest_revision().is_none());
        assert_eq!(
            revisions.require_latest_revision().unwrap_err(),
            HistoryError::NoRevisions
        );
    }

    #[test]
    fn test_sorted_is_idempotent() {
        let revisions = Revisions::new(vec![revision(1, RevisionType::Add), revision(2, RevisionType::Mod)]);

        let desc = revisions.sorted(RevisionSort::Desc);
        assert_eq!(numbers(&desc), vec![2, 1]);

        let still_desc = desc.sorted(RevisionSort::Desc);
        assert_eq!(numbers(&still_desc), vec![2, 1]);
    }

    #[test]
    fn test_with_config_excludes_deletions() {
        let config = HistoryConfig {
            sort: RevisionSort::Desc,
            include_deletions: false,
        };
        let revisions = Revisions::with_config(
            &config,
            vec![
                revision(1, RevisionType::Add),
                revision(3, RevisionType::Del),
                revision(2, RevisionType::Mod),
            ],
        );

        assert_eq!(numbers(&revisions), vec![2, 1]);
        assert_eq!(revisions.sort(), RevisionSort::Desc);
    }

    #[test]
    fn test_into_iter_yields_entities_in_order() {
        let revisions = Revisions::new(vec![revision(2, RevisionType::Mod), revision(1, RevisionType::Add)]);

        let states: Vec<String> = revisions.into_iter().map(|r| r.into_entity()).collect();
        assert_eq!(states, vec!["state-1".to_string(), "state-2".to_string()]);
    }
}
