//! Revision Invariant Tests
//!
//! Tests for the typed revision value contracts:
//! - Construction rejects absent parts
//! - Metadata queries are forwarded unchanged
//! - Ordering by revision number only
//! - Equality and hashing by revision number and entity
//! - Rendering

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use revhistory::{
    DefaultRevisionEntity, DefaultRevisionMetadata, HistoryConfig, RevisionDelegate,
    RevisionMetadata, RevisionMetadataWithType, RevisionNumber, RevisionSort, RevisionType,
    RevisionWithType, Revisions,
};

const JAN_FIRST_2020_MILLIS: i64 = 1_577_836_800_000;

fn jan_first_2020() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn typed_metadata(number: i32, kind: RevisionType) -> RevisionMetadataWithType {
    let metadata = DefaultRevisionMetadata::from_entity(DefaultRevisionEntity::new(
        number,
        JAN_FIRST_2020_MILLIS,
    ))
    .unwrap();
    RevisionMetadataWithType::new(metadata, kind)
}

fn revision<T>(number: i32, entity: T) -> RevisionWithType<T> {
    RevisionWithType::new(typed_metadata(number, RevisionType::Mod), entity)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction Tests
// =============================================================================

/// Missing metadata or change type is an invalid argument.
#[test]
fn test_metadata_with_type_rejects_absent_parts() {
    let metadata = Arc::new(
        DefaultRevisionMetadata::from_entity(DefaultRevisionEntity::new(1, 0)).unwrap(),
    );

    let no_metadata =
        RevisionMetadataWithType::<DefaultRevisionMetadata>::from_parts(None, Some(RevisionType::Add));
    assert!(no_metadata.unwrap_err().is_invalid_argument());

    let no_type = RevisionMetadataWithType::from_parts(Some(Arc::clone(&metadata)), None);
    assert!(no_type.unwrap_err().is_invalid_argument());

    let both = RevisionMetadataWithType::from_parts(Some(metadata), Some(RevisionType::Add));
    assert!(both.is_ok());
}

/// Missing metadata or entity is an invalid argument.
#[test]
fn test_revision_with_type_rejects_absent_parts() {
    let no_entity = RevisionWithType::<&str>::from_parts(Some(typed_metadata(1, RevisionType::Add)), None);
    assert!(no_entity.unwrap_err().is_invalid_argument());

    let no_metadata = RevisionWithType::<_, DefaultRevisionMetadata>::from_parts(None, Some("Foo"));
    assert!(no_metadata.unwrap_err().is_invalid_argument());

    let both = RevisionWithType::from_parts(Some(typed_metadata(1, RevisionType::Add)), Some("Foo"));
    assert_eq!(both.unwrap().entity(), &"Foo");
}

// =============================================================================
// Forwarding Tests
// =============================================================================

/// Number, date and change type come back exactly as supplied.
#[test]
fn test_metadata_queries_forwarded() {
    for kind in [RevisionType::Add, RevisionType::Mod, RevisionType::Del] {
        let metadata = typed_metadata(5, kind);

        assert_eq!(metadata.revision_number(), RevisionNumber::new(5));
        assert_eq!(metadata.revision_date(), jan_first_2020());
        assert_eq!(metadata.revision_type(), kind);
        assert_eq!(
            metadata.delegate(),
            &RevisionDelegate::Default(DefaultRevisionEntity::new(5, JAN_FIRST_2020_MILLIS))
        );
    }
}

/// A provider-defined metadata type can be decorated too.
#[test]
fn test_provider_defined_metadata() {
    #[derive(Debug)]
    struct LedgerRevision {
        number: i32,
        at: NaiveDateTime,
        record: RevisionDelegate,
    }

    impl RevisionMetadata for LedgerRevision {
        fn revision_number(&self) -> RevisionNumber {
            RevisionNumber::new(self.number)
        }

        fn revision_date(&self) -> NaiveDateTime {
            self.at
        }

        fn delegate(&self) -> &RevisionDelegate {
            &self.record
        }
    }

    let ledger = LedgerRevision {
        number: 12,
        at: jan_first_2020(),
        record: RevisionDelegate::Custom(serde_json::json!({ "author": "bob" })),
    };
    let rev = RevisionWithType::new(RevisionMetadataWithType::new(ledger, RevisionType::Add), 1_u8);

    assert_eq!(rev.revision_number(), RevisionNumber::new(12));
    assert_eq!(
        rev.metadata().delegate().as_custom().unwrap()["author"],
        "bob"
    );
}

// =============================================================================
// Ordering Tests
// =============================================================================

/// Lower revision numbers sort first.
#[test]
fn test_ordering_by_revision_number() {
    let first = revision(1, "A");
    let second = revision(2, "A");

    assert_eq!(first.compare_to(&second), Ordering::Less);
    assert_eq!(second.compare_to(&first), Ordering::Greater);
    assert_eq!(first.compare_to(&first), Ordering::Equal);
}

/// Same revision number compares equal regardless of entity, but is not equal.
#[test]
fn test_same_revision_different_entity() {
    let a = revision(3, "A");
    let b = revision(3, "B");

    assert_eq!(a.compare_to(&b), Ordering::Equal);
    assert_ne!(a, b);
}

/// Sorting a history uses the revision number only.
#[test]
fn test_history_sorting() {
    let history = Revisions::new(vec![revision(10, "c"), revision(2, "a"), revision(5, "b")]);

    let entities: Vec<&str> = history.iter().map(|r| *r.entity()).collect();
    assert_eq!(entities, vec!["a", "b", "c"]);
    assert_eq!(
        history.latest_revision().unwrap().revision_number(),
        RevisionNumber::new(10)
    );

    let newest_first = Revisions::with_config(
        &HistoryConfig::with_sort(RevisionSort::Desc),
        vec![revision(2, "a"), revision(10, "c")],
    );
    assert_eq!(*newest_first.content()[0].entity(), "c");
}

// =============================================================================
// Equality Tests
// =============================================================================

/// Equality is reflexive, symmetric and transitive.
#[test]
fn test_equality_laws() {
    let a = revision(4, String::from("X"));
    let b = revision(4, String::from("X"));
    let c = RevisionWithType::new(typed_metadata(4, RevisionType::Del), String::from("X"));

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

/// Equal revisions hash equally.
#[test]
fn test_equal_implies_same_hash() {
    let a = revision(4, String::from("X"));
    let b = RevisionWithType::new(typed_metadata(4, RevisionType::Add), String::from("X"));

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

/// Different revision numbers are never equal.
#[test]
fn test_different_revision_numbers_not_equal() {
    assert_ne!(revision(1, "A"), revision(2, "A"));
}

// =============================================================================
// Rendering Tests
// =============================================================================

/// Rendering includes the number, the entity and the metadata.
#[test]
fn test_display_scenario() {
    let rev = RevisionWithType::new(typed_metadata(5, RevisionType::Mod), "Foo");
    let rendered = rev.to_string();

    assert_eq!(rev.revision_number(), RevisionNumber::new(5));
    assert!(rendered.contains('5'));
    assert!(rendered.contains("Foo"));
    assert!(rendered.contains(&rev.metadata().to_string()));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// Revisions can be shared across threads.
#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<RevisionMetadataWithType>();
    assert_send_sync::<RevisionWithType<String>>();
    assert_send_sync::<Revisions<String>>();

    let rev = Arc::new(revision(8, String::from("shared")));
    let handle = {
        let rev = Arc::clone(&rev);
        std::thread::spawn(move || rev.revision_number())
    };
    assert_eq!(handle.join().unwrap(), RevisionNumber::new(8));
}
