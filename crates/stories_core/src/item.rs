use serde::Deserialize;
use url::Url;

pub type ItemId = u64;

/// Value of `kind` carried by story items.
pub const STORY_KIND: &str = "story";

/// An item as served by the remote store.
///
/// Only `kind` and `url` are inspected by the pipeline; the rest is carried
/// through for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub descendants: u32,
    #[serde(default)]
    pub kids: Vec<ItemId>,
    #[serde(default)]
    pub text: String,
}

impl Item {
    /// Hostname of `url` without a leading `www.`.
    pub fn host(&self) -> Option<String> {
        if self.url.is_empty() {
            return None;
        }
        let parsed = Url::parse(&self.url).ok()?;
        let host = parsed.host_str()?;
        Some(host.strip_prefix("www.").unwrap_or(host).to_string())
    }
}

/// Qualifying predicate: a story that links somewhere.
pub fn is_story_link(item: &Item) -> bool {
    item.kind == STORY_KIND && !item.url.is_empty()
}
