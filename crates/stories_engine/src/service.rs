use std::sync::Arc;
use std::time::{Duration, Instant};

use engine_logging::engine_info;
use stories_core::{
    is_story_link, reduce, Item, OverfetchPlanner, PlanError, DEFAULT_OVERFETCH_FACTOR,
};
use thiserror::Error;

use crate::{fetch_all, ItemStore, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub target_count: usize,
    pub overfetch_factor: f64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            target_count: 30,
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to load top stories: {0}")]
    ListTopIds(#[source] StoreError),
}

/// Qualifying stories in rank order, with the time it took to gather them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopStories {
    pub stories: Vec<Item>,
    pub elapsed: Duration,
}

pub struct TopStoriesService {
    store: Arc<dyn ItemStore>,
    planner: OverfetchPlanner,
}

impl TopStoriesService {
    pub fn new(store: Arc<dyn ItemStore>, settings: &ServiceSettings) -> Result<Self, PlanError> {
        let planner = OverfetchPlanner::new(settings.overfetch_factor)?;
        Ok(Self { store, planner })
    }

    /// Returns up to `count` linked stories from the top of the ranking.
    ///
    /// Only a failure to list the ranking is an error; failed item fetches
    /// and non-qualifying items just shorten the result.
    pub async fn top_stories(&self, count: usize) -> Result<TopStories, ServiceError> {
        let start = Instant::now();
        let ranked = self
            .store
            .top_ids()
            .await
            .map_err(ServiceError::ListTopIds)?;

        let selected = self.planner.plan(&ranked, count);
        let outcomes = fetch_all(Arc::clone(&self.store), selected).await;
        let failed = outcomes.iter().filter(|outcome| !outcome.is_success()).count();
        let stories = reduce(&outcomes, is_story_link, count);

        let elapsed = start.elapsed();
        engine_info!(
            "top_stories ranked={} fetched={} failed={} qualifying={} wanted={} elapsed={:?}",
            ranked.len(),
            selected.len(),
            failed,
            stories.len(),
            count,
            elapsed
        );
        Ok(TopStories { stories, elapsed })
    }
}
