use std::time::Duration;

use futures_util::StreamExt;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use stories_core::{Item, ItemId};

use crate::{ItemStore, StoreError, StoreFailureKind};

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// [`ItemStore`] backed by the Hacker News Firebase API.
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    settings: ClientSettings,
    http: reqwest::Client,
}

impl HackerNewsClient {
    pub fn new(settings: ClientSettings) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| StoreError::new(StoreFailureKind::Network, err.to_string()))?;
        Ok(Self { settings, http })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, StoreError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&raw)
            .map_err(|err| StoreError::new(StoreFailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let url = self.endpoint(path)?;
        let response = self.http.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::new(StoreFailureKind::NotFound, path.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::new(
                StoreFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::new(StoreFailureKind::Decode, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> StoreError {
        StoreError::new(
            StoreFailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl ItemStore for HackerNewsClient {
    async fn top_ids(&self) -> Result<Vec<ItemId>, StoreError> {
        self.get_json("topstories.json").await
    }

    async fn fetch_item(&self, id: ItemId) -> Result<Item, StoreError> {
        // Unknown ids come back as a 200 with a `null` body.
        let item: Option<Item> = self.get_json(&format!("item/{id}.json")).await?;
        item.ok_or_else(|| StoreError::new(StoreFailureKind::NotFound, format!("item {id}")))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        return StoreError::new(StoreFailureKind::Timeout, err.to_string());
    }
    StoreError::new(StoreFailureKind::Network, err.to_string())
}
