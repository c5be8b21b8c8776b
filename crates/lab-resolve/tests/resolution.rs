//! End-to-end find-or-create scenarios against an in-memory libSQL store,
//! plus failure paths driven through stub collaborators.

use std::collections::{BTreeSet, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use lab_config::LabConfig;
use lab_core::entities::Lab;
use lab_core::errors::{ProviderError, ValidationError};
use lab_core::fields::LabFields;
use lab_core::vocabulary::TagName;
use lab_db::error::DatabaseError;
use lab_db::{LabField, LabService, LabStore, MatchMode};
use lab_resolve::{
    IdAllocator, KeywordClassifier, LabResolver, LabText, RandomAllocator, SynthesisError,
    TagClassifier,
};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Stub collaborators
// ---------------------------------------------------------------------------

/// Hands out ids from a fixed queue, then repeats `fallback`. Clones share
/// the queue and the call counter.
#[derive(Clone)]
struct SequenceAllocator {
    state: Arc<SequenceState>,
}

struct SequenceState {
    ids: Mutex<VecDeque<i64>>,
    fallback: i64,
    calls: AtomicU32,
}

impl SequenceAllocator {
    fn new(ids: &[i64], fallback: i64) -> Self {
        Self {
            state: Arc::new(SequenceState {
                ids: Mutex::new(ids.iter().copied().collect()),
                fallback,
                calls: AtomicU32::new(0),
            }),
        }
    }

    fn calls(&self) -> u32 {
        self.state.calls.load(Ordering::SeqCst)
    }
}

impl IdAllocator for SequenceAllocator {
    fn allocate(&self) -> i64 {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.state.fallback)
    }
}

struct FailingClassifier;

impl TagClassifier for FailingClassifier {
    async fn classify(&self, _text: &LabText<'_>) -> Result<BTreeSet<TagName>, ProviderError> {
        Err(ProviderError::new("tagger", "upstream timed out"))
    }
}

/// A store whose inserts always fail with a fixed error kind.
struct RejectingStore {
    duplicate: bool,
    inserts: AtomicU32,
}

impl RejectingStore {
    fn duplicates() -> Self {
        Self {
            duplicate: true,
            inserts: AtomicU32::new(0),
        }
    }

    fn broken() -> Self {
        Self {
            duplicate: false,
            inserts: AtomicU32::new(0),
        }
    }
}

impl LabStore for RejectingStore {
    async fn insert_lab(&self, lab: &Lab) -> Result<Lab, DatabaseError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.duplicate {
            Err(DatabaseError::Duplicate { lab_id: lab.lab_id })
        } else {
            Err(DatabaseError::Query("disk I/O error".into()))
        }
    }

    async fn find_lab_by(
        &self,
        _field: LabField,
        _value: &str,
        _mode: MatchMode,
    ) -> Result<Option<Lab>, DatabaseError> {
        Ok(None)
    }

    async fn search_labs(&self, _query: &str, _limit: u32) -> Result<Vec<Lab>, DatabaseError> {
        Ok(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

async fn memory_store() -> LabService {
    LabService::new_local(":memory:").await.unwrap()
}

async fn default_resolver() -> LabResolver<LabService, RandomAllocator, KeywordClassifier> {
    LabResolver::from_config(memory_store().await, &LabConfig::default()).unwrap()
}

fn cognitive_neuroscience() -> LabFields {
    LabFields::new(
        "Cognitive Neuroscience Lab",
        "Exploring the neural underpinnings of human cognition and memory.",
        "Psychology and Brain Sciences",
        "Dr. Eleanor Vance",
    )
    .url("https://cnl.university.edu")
    .location("Wexler Building, Room 303")
    .email("EVance-Lab@University.edu")
    .research_areas(["fMRI", "Memory Consolidation"])
}

fn vision_lab() -> LabFields {
    LabFields::new(
        "Vision Lab",
        "Computer vision and deep learning research.",
        "Computer Science",
        "Grace Hopper",
    )
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creates_then_finds_cognitive_neuroscience_lab() {
    let resolver = default_resolver().await;
    assert_eq!(resolver.find_lab("Cognitive Neuroscience Lab").await.unwrap(), None);

    let lab = resolver.create_lab(cognitive_neuroscience()).await.unwrap();
    assert!((1000..=9999).contains(&lab.lab_id), "id {} out of range", lab.lab_id);
    assert!(lab.has_tag("Biology"));
    assert!(lab.has_tag("Neuroscience"));
    assert!(lab.has_tag("Research"));
    assert_eq!(lab.email.as_deref(), Some("evance-lab@university.edu"));
    assert_eq!(lab.research_areas, vec!["fMRI", "Memory Consolidation"]);
    assert!(lab.accepting_students);

    let found = resolver
        .find_lab("Cognitive Neuroscience Lab")
        .await
        .unwrap()
        .expect("created lab must be found");
    assert_eq!(found, lab);
}

#[tokio::test]
async fn lookup_is_idempotent() {
    let resolver = default_resolver().await;
    let lab = resolver.create_lab(cognitive_neuroscience()).await.unwrap();

    for _ in 0..3 {
        let found = resolver.find_lab("  Cognitive Neuroscience Lab ").await.unwrap();
        assert_eq!(found.as_ref(), Some(&lab));
    }
    assert_eq!(resolver.lookup().find_by_id(lab.lab_id).await.unwrap(), Some(lab));
}

#[tokio::test]
async fn lookup_case_follows_config() {
    let resolver = default_resolver().await;
    resolver.create_lab(vision_lab()).await.unwrap();
    assert_eq!(resolver.find_lab("vision lab").await.unwrap(), None);

    let mut config = LabConfig::default();
    config.lookup.case_sensitive = false;
    let store = memory_store().await;
    let resolver = LabResolver::from_config(store, &config).unwrap();
    let lab = resolver.create_lab(vision_lab()).await.unwrap();
    assert_eq!(resolver.find_lab("VISION LAB").await.unwrap(), Some(lab));
}

#[tokio::test]
async fn resolve_creates_once_then_finds() {
    let resolver = default_resolver().await;

    let first = resolver.resolve(vision_lab()).await.unwrap();
    assert!(first.created());

    let second = resolver.resolve(vision_lab()).await.unwrap();
    assert!(!second.created());
    assert_eq!(second.lab(), first.lab());
    assert_eq!(resolver.store().count_labs().await.unwrap(), 1);
}

#[tokio::test]
async fn collision_retries_with_a_fresh_id() {
    let allocator = SequenceAllocator::new(&[4242, 4242, 4243], 1);
    let resolver = LabResolver::new(memory_store().await, allocator.clone(), KeywordClassifier);

    let first = resolver.create_lab(vision_lab()).await.unwrap();
    let second = resolver.create_lab(cognitive_neuroscience()).await.unwrap();

    assert_eq!(first.lab_id, 4242);
    assert_eq!(second.lab_id, 4243);
    assert_eq!(allocator.calls(), 3);

    let stored = resolver.lookup().find_by_id(4242).await.unwrap().unwrap();
    assert_eq!(stored, first, "the winner is never overwritten");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_creates_never_share_an_id() {
    let allocator = SequenceAllocator::new(&[4242, 4242, 4243], 1);
    let resolver = Arc::new(LabResolver::new(
        memory_store().await,
        allocator.clone(),
        KeywordClassifier,
    ));

    let a = tokio::spawn({
        let resolver = Arc::clone(&resolver);
        async move { resolver.create_lab(vision_lab()).await }
    });
    let b = tokio::spawn({
        let resolver = Arc::clone(&resolver);
        async move { resolver.create_lab(cognitive_neuroscience()).await }
    });
    let a = a.await.unwrap().unwrap();
    let b = b.await.unwrap().unwrap();

    let ids: BTreeSet<i64> = [a.lab_id, b.lab_id].into_iter().collect();
    assert_eq!(ids, BTreeSet::from([4242, 4243]));
    assert_eq!(allocator.calls(), 3);
    assert_eq!(resolver.store().count_labs().await.unwrap(), 2);

    let holder = resolver.lookup().find_by_id(4242).await.unwrap().unwrap();
    assert!(holder == a || holder == b);
}

#[tokio::test]
async fn exhaustion_against_real_store() {
    let allocator = SequenceAllocator::new(&[], 1000);
    let resolver = LabResolver::new(memory_store().await, allocator.clone(), KeywordClassifier);
    resolver.create_lab(vision_lab()).await.unwrap();

    let err = resolver.create_lab(cognitive_neuroscience()).await.unwrap_err();
    assert!(
        matches!(err, SynthesisError::AllocationExhausted { attempts: 5 }),
        "got {err:?}"
    );
    assert_eq!(allocator.calls(), 6);
    assert_eq!(resolver.store().count_labs().await.unwrap(), 1);
    assert_eq!(resolver.find_lab("Cognitive Neuroscience Lab").await.unwrap(), None);
}

#[tokio::test]
async fn exhaustion_after_exactly_max_attempts() {
    let resolver = LabResolver::new(RejectingStore::duplicates(), RandomAllocator::default(), KeywordClassifier)
        .max_attempts(3);

    let err = resolver.create_lab(vision_lab()).await.unwrap_err();
    assert!(
        matches!(err, SynthesisError::AllocationExhausted { attempts: 3 }),
        "got {err:?}"
    );
    assert_eq!(resolver.store().inserts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn other_store_failures_are_not_retried() {
    let resolver = LabResolver::new(RejectingStore::broken(), RandomAllocator::default(), KeywordClassifier);

    let err = resolver.create_lab(vision_lab()).await.unwrap_err();
    assert!(
        matches!(err, SynthesisError::Store(DatabaseError::Query(ref m)) if m == "disk I/O error"),
        "got {err:?}"
    );
    assert_eq!(resolver.store().inserts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_persist_leaves_no_record() {
    let resolver = default_resolver().await;
    resolver
        .store()
        .db()
        .conn()
        .execute("DELETE FROM tags WHERE id = ?1", [TagName::Research.id()])
        .await
        .unwrap();

    let err = resolver.create_lab(cognitive_neuroscience()).await.unwrap_err();
    assert!(
        matches!(err, SynthesisError::Store(DatabaseError::Constraint(_))),
        "got {err:?}"
    );
    assert_eq!(resolver.find_lab("Cognitive Neuroscience Lab").await.unwrap(), None);
    assert_eq!(resolver.store().count_labs().await.unwrap(), 0);
}

#[tokio::test]
async fn invalid_fields_stop_before_allocation() {
    let allocator = SequenceAllocator::new(&[], 4242);
    let resolver = LabResolver::new(memory_store().await, allocator.clone(), KeywordClassifier);

    let mut fields = vision_lab();
    fields.name = Some("   ".into());
    let err = resolver.create_lab(fields).await.unwrap_err();
    assert!(
        matches!(
            err,
            SynthesisError::Validation(ValidationError::MissingRequiredField { field: "name" })
        ),
        "got {err:?}"
    );

    let err = resolver
        .create_lab(vision_lab().email("not-an-email").url("nota url"))
        .await
        .unwrap_err();
    match err {
        SynthesisError::Validation(v) => assert_eq!(v.fields(), vec!["url", "email"]),
        other => panic!("expected Validation, got {other:?}"),
    }
    assert_eq!(allocator.calls(), 0);
    assert_eq!(resolver.store().count_labs().await.unwrap(), 0);
}

#[tokio::test]
async fn provider_failure_is_surfaced() {
    let allocator = SequenceAllocator::new(&[], 4242);
    let resolver = LabResolver::new(memory_store().await, allocator.clone(), FailingClassifier);

    let err = resolver.create_lab(vision_lab()).await.unwrap_err();
    match err {
        SynthesisError::Provider(e) => assert_eq!(e.provider, "tagger"),
        other => panic!("expected Provider, got {other:?}"),
    }
    assert_eq!(allocator.calls(), 0);
    assert_eq!(resolver.store().count_labs().await.unwrap(), 0);
}

#[tokio::test]
async fn search_finds_created_labs() {
    let resolver = default_resolver().await;
    let lab = resolver.create_lab(cognitive_neuroscience()).await.unwrap();
    resolver.create_lab(vision_lab()).await.unwrap();

    let hits = resolver.search_labs("memory consolidation", 10).await.unwrap();
    assert_eq!(hits, vec![lab]);
    assert!(resolver.search_labs("", 10).await.is_err());
}
