use stories_core::{Item, ItemId};

use crate::StoreError;

/// Remote store of ranked items.
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// Ids of the current top items, best first.
    async fn top_ids(&self) -> Result<Vec<ItemId>, StoreError>;

    /// Full content of one item.
    async fn fetch_item(&self, id: ItemId) -> Result<Item, StoreError>;
}
