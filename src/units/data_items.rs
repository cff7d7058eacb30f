use crate::dom::{Page, SharedPage};
use crate::errors::RefreshError;
use crate::models::{decode_items, DataItems};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DATA_ITEM_CLASS: &str = "data-item";

/// Path of the data-item endpoint served by the admin app.
pub const DATA_ITEMS_PATH: &str = "/api/current-data";

/// Polls the data-item endpoint and patches matching `.data-item` elements.
#[derive(Debug, Clone)]
pub struct DataItemRefresher {
    client: Client,
    endpoint: String,
}

impl DataItemRefresher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RefreshError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self) -> Result<DataItems, RefreshError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RefreshError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(decode_items(&body)?)
    }

    /// One fetch-and-apply cycle. Nothing on the page changes when the fetch
    /// fails.
    pub async fn run_cycle(&self, page: &SharedPage) -> Result<usize, RefreshError> {
        let items = self.fetch().await?;
        let mut page = page.lock().await;
        Ok(apply_updates(&mut page, &items))
    }
}

/// Patches every `.data-item` element whose `data-item` key has an entry in
/// `items`; returns how many elements were touched.
pub fn apply_updates(page: &mut Page, items: &DataItems) -> usize {
    let mut applied = 0;
    for el in page.by_class_mut(DATA_ITEM_CLASS) {
        let Some(update) = el.data("item").and_then(|key| items.get(key)) else {
            continue;
        };

        if let Some(content) = &update.content {
            el.set_text(content.as_str());
        }
        for attr in &update.data {
            match &attr.content {
                Some(content) if !attr.key.is_empty() => {
                    el.set_attribute(attr.key.as_str(), content.as_str());
                }
                _ => debug!(element = %el.describe(), key = %attr.key, "ignoring incomplete attribute update"),
            }
        }
        applied += 1;
    }
    applied
}
