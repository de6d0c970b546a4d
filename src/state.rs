//! View State
//!
//! Load lifecycle and search text. `Idle -> Loading -> Ready | Failed`, and
//! `Failed -> Loading` again when the user hits Retry.

use crate::api::FetchError;
use crate::models::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub load: LoadState,
    pub search_text: String,
}

impl ViewState {
    pub fn loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Record the fetch outcome; returns the catalog to show (empty on failure)
    pub fn complete(&mut self, result: Result<Vec<Item>, FetchError>) -> Vec<Item> {
        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "catalog ready");
                self.load = LoadState::Ready;
                items
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog fetch failed");
                self.load = LoadState::Failed(e.to_string());
                Vec::new()
            }
        }
    }
}
