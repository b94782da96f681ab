//! Stories engine: item store access, concurrent fetching and the top-stories service.
mod client;
mod coordinator;
mod service;
mod store;
mod types;

pub use client::{ClientSettings, HackerNewsClient, DEFAULT_BASE_URL};
pub use coordinator::{fetch_all, FetchOutcome};
pub use service::{ServiceError, ServiceSettings, TopStories, TopStoriesService};
pub use store::ItemStore;
pub use types::{StoreError, StoreFailureKind};
