//! Catalog Fetcher
//!
//! One list request, then detail requests in fixed-size batches. Requests in a
//! batch run concurrently; the next batch starts once the whole previous batch
//! resolved. Any failure aborts the fetch, there is no partial catalog.

use futures::future::try_join_all;

use super::{CatalogTransport, FetchError};
use crate::config::AppConfig;
use crate::models::{Item, ItemDetail, ItemList};

#[derive(Debug, Clone)]
pub struct CatalogFetcher<T> {
    transport: T,
    config: AppConfig,
}

impl<T: CatalogTransport> CatalogFetcher<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self { transport, config }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Item>, FetchError> {
        let list: ItemList = self.transport.get_json(&self.config.list_url()).await?;
        let batch_size = self.config.batch_size.max(1);
        tracing::info!(count = list.results.len(), batch_size, "fetching catalog details");

        let mut items = Vec::with_capacity(list.results.len());
        for (index, batch) in list.results.chunks(batch_size).enumerate() {
            let details = try_join_all(
                batch
                    .iter()
                    .map(|item_ref| self.transport.get_json::<ItemDetail>(&item_ref.url)),
            )
            .await?;
            tracing::debug!(batch = index, size = details.len(), "batch resolved");
            items.extend(details.into_iter().map(Item::from));
        }

        Ok(items)
    }
}
