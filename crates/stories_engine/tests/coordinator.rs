mod common;

use std::sync::Arc;

use common::{story, Entry, FakeStore};
use pretty_assertions::assert_eq;
use stories_core::{ItemId, Outcome};
use stories_engine::{fetch_all, FetchOutcome, ItemStore, StoreFailureKind};

fn outcome_ids(outcomes: &[FetchOutcome]) -> Vec<Option<ItemId>> {
    outcomes
        .iter()
        .map(|outcome| outcome.item().map(|item| item.id))
        .collect()
}

#[tokio::test]
async fn outcomes_follow_input_order_not_completion_order() {
    engine_logging::initialize_for_tests();
    let store = Arc::new(
        FakeStore::new(vec![])
            .with(1, 50, Entry::Found(story(1, "http://a.com")))
            .with(3, 5, Entry::Found(story(3, "http://c.com"))),
    );

    let outcomes = fetch_all(store.clone(), &[1, 2, 3]).await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcome_ids(&outcomes), vec![Some(1), None, Some(3)]);
    assert_eq!(
        outcomes[1].error().map(|err| err.kind.clone()),
        Some(StoreFailureKind::NotFound)
    );

    // Item 1 is the slowest, so it must have arrived last.
    assert_eq!(store.completion_order().last(), Some(&1));
}

#[tokio::test]
async fn order_is_preserved_for_any_latency_permutation() {
    let ids: Vec<ItemId> = vec![10, 20, 30, 40];
    let latencies: [[u64; 4]; 6] = [
        [0, 10, 20, 30],
        [30, 20, 10, 0],
        [20, 0, 30, 10],
        [10, 30, 0, 20],
        [30, 0, 0, 30],
        [5, 5, 5, 5],
    ];

    for delays in latencies {
        let mut fake = FakeStore::new(vec![]);
        for (&id, &delay) in ids.iter().zip(delays.iter()) {
            fake = fake.with(id, delay, Entry::Found(story(id, "http://x.com")));
        }
        let store: Arc<dyn ItemStore> = Arc::new(fake);

        let outcomes = fetch_all(store, &ids).await;
        let expected: Vec<Option<ItemId>> = ids.iter().copied().map(Some).collect();
        assert_eq!(outcome_ids(&outcomes), expected, "delays {delays:?}");
    }
}

#[tokio::test]
async fn every_id_yields_exactly_one_outcome_even_when_failing() {
    let store = Arc::new(
        FakeStore::new(vec![])
            .with(1, 5, Entry::Failing(StoreFailureKind::Timeout))
            .with(2, 1, Entry::Found(story(2, "http://b.com")))
            .with(3, 0, Entry::Failing(StoreFailureKind::HttpStatus(503)))
            .with(4, 2, Entry::Failing(StoreFailureKind::Network)),
    );
    let ids = [1, 2, 3, 4, 5];

    let outcomes = fetch_all(store.clone(), &ids).await;

    assert_eq!(outcomes.len(), ids.len());
    assert_eq!(store.fetch_calls(), ids.len());
    let kinds: Vec<Option<StoreFailureKind>> = outcomes
        .iter()
        .map(|outcome| outcome.error().map(|err| err.kind.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(StoreFailureKind::Timeout),
            None,
            Some(StoreFailureKind::HttpStatus(503)),
            Some(StoreFailureKind::Network),
            Some(StoreFailureKind::NotFound),
        ]
    );
}

#[tokio::test]
async fn panicking_fetch_is_recorded_as_aborted() {
    let store = Arc::new(
        FakeStore::new(vec![])
            .with(1, 0, Entry::Found(story(1, "http://a.com")))
            .with(2, 0, Entry::Panics)
            .with(3, 0, Entry::Found(story(3, "http://c.com"))),
    );

    let outcomes = fetch_all(store, &[1, 2, 3]).await;

    assert_eq!(outcome_ids(&outcomes), vec![Some(1), None, Some(3)]);
    assert!(matches!(
        &outcomes[1],
        Outcome::Failure(err) if err.kind == StoreFailureKind::TaskAborted
    ));
}

#[tokio::test]
async fn empty_input_makes_no_calls() {
    let store = Arc::new(FakeStore::new(vec![]));

    let outcomes = fetch_all(store.clone(), &[]).await;

    assert!(outcomes.is_empty());
    assert_eq!(store.fetch_calls(), 0);
}

#[tokio::test]
async fn duplicate_ids_get_separate_slots() {
    let store =
        Arc::new(FakeStore::new(vec![]).with(7, 1, Entry::Found(story(7, "http://g.com"))));

    let outcomes = fetch_all(store.clone(), &[7, 7]).await;

    assert_eq!(outcome_ids(&outcomes), vec![Some(7), Some(7)]);
    assert_eq!(store.fetch_calls(), 2);
}
