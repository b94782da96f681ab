#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use stories_core::{Item, ItemId};
use stories_engine::{ItemStore, StoreError, StoreFailureKind};

pub enum Entry {
    Found(Item),
    Failing(StoreFailureKind),
    Panics,
}

/// In-memory store with per-item latency and call accounting.
pub struct FakeStore {
    top: Result<Vec<ItemId>, StoreError>,
    entries: HashMap<ItemId, (Duration, Entry)>,
    fetch_calls: AtomicUsize,
    completed: Mutex<Vec<ItemId>>,
}

impl FakeStore {
    pub fn new(top: Vec<ItemId>) -> Self {
        Self {
            top: Ok(top),
            entries: HashMap::new(),
            fetch_calls: AtomicUsize::new(0),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_top(err: StoreError) -> Self {
        Self {
            top: Err(err),
            ..Self::new(Vec::new())
        }
    }

    pub fn with(mut self, id: ItemId, delay_ms: u64, entry: Entry) -> Self {
        self.entries
            .insert(id, (Duration::from_millis(delay_ms), entry));
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Ids in the order their fetches finished.
    pub fn completion_order(&self) -> Vec<ItemId> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ItemStore for FakeStore {
    async fn top_ids(&self) -> Result<Vec<ItemId>, StoreError> {
        self.top.clone()
    }

    async fn fetch_item(&self, id: ItemId) -> Result<Item, StoreError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let Some((delay, entry)) = self.entries.get(&id) else {
            self.completed.lock().unwrap().push(id);
            return Err(StoreError::new(StoreFailureKind::NotFound, format!("item {id}")));
        };
        tokio::time::sleep(*delay).await;
        self.completed.lock().unwrap().push(id);
        match entry {
            Entry::Found(item) => Ok(item.clone()),
            Entry::Failing(kind) => Err(StoreError::new(kind.clone(), format!("item {id}"))),
            Entry::Panics => panic!("simulated crash fetching item {id}"),
        }
    }
}

pub fn story(id: ItemId, url: &str) -> Item {
    Item {
        id,
        kind: "story".to_string(),
        url: url.to_string(),
        title: format!("story {id}"),
        ..Item::default()
    }
}

pub fn job(id: ItemId) -> Item {
    Item {
        id,
        kind: "job".to_string(),
        url: format!("http://jobs.example.com/{id}"),
        ..Item::default()
    }
}
