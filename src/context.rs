//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::storage::{BrowserStorage, OwnedStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog fetch attempt counter - read
    pub reload_trigger: ReadSignal<u32>,
    /// Catalog fetch attempt counter - write
    set_reload_trigger: WriteSignal<u32>,
    /// Compile-time settings
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config,
        }
    }

    /// Re-issue the catalog fetch (Retry button)
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Owned-set persistence bound to localStorage
    pub fn owned_store(&self) -> OwnedStore<BrowserStorage> {
        OwnedStore::browser(self.config.storage_key)
    }
}
