use std::sync::Arc;

use engine_logging::{engine_debug, engine_error, engine_warn};
use stories_core::{ItemId, Outcome};
use tokio::sync::mpsc;

use crate::{ItemStore, StoreError, StoreFailureKind};

pub type FetchOutcome = Outcome<StoreError>;

/// Fetches every id concurrently and returns one outcome per id, in the
/// order of `ids` regardless of completion order.
///
/// Each task sends its `(index, outcome)` pair over a channel sized to the
/// number of tasks; the channel closes once the last task drops its sender,
/// and a single collector places outcomes by index. A failed fetch becomes
/// `Outcome::Failure` at its slot and does not affect the others.
pub async fn fetch_all(store: Arc<dyn ItemStore>, ids: &[ItemId]) -> Vec<FetchOutcome> {
    let total = ids.len();
    if total == 0 {
        return Vec::new();
    }

    let (tx, mut rx) = mpsc::channel::<(usize, FetchOutcome)>(total);
    for (index, &id) in ids.iter().enumerate() {
        let store = Arc::clone(&store);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = Outcome::from(store.fetch_item(id).await);
            let _ = tx.send((index, outcome)).await;
        });
    }
    drop(tx);

    let mut slots: Vec<Option<FetchOutcome>> = vec![None; total];
    let mut received = 0usize;
    while let Some((index, outcome)) = rx.recv().await {
        if let Outcome::Failure(err) = &outcome {
            engine_warn!("Error fetching item {} (rank {}): {}", ids[index], index, err);
        }
        slots[index] = Some(outcome);
        received += 1;
    }
    engine_debug!("fetch_all collected {}/{} outcomes", received, total);

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| {
                // The task ended without reporting, e.g. it panicked.
                engine_error!(
                    "Fetch task for item {} (rank {}) never reported",
                    ids[index],
                    index
                );
                Outcome::Failure(StoreError::new(
                    StoreFailureKind::TaskAborted,
                    format!("item {}", ids[index]),
                ))
            })
        })
        .collect()
}
