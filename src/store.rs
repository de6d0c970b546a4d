//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::OwnedFilter;
use crate::models::Item;
use crate::owned::OwnedSet;
use crate::state::ViewState;
use crate::storage::{KeyValueStore, OwnedStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fetched catalog, in API order
    pub items: Vec<Item>,
    /// Ids the user marked as owned
    pub owned: OwnedSet,
    /// Load lifecycle and search text
    pub view_state: ViewState,
    /// Owned/missing narrowing of the grid
    pub owned_filter: OwnedFilter,
}

impl AppState {
    pub fn new(owned: OwnedSet) -> Self {
        Self {
            owned,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip ownership of an item and persist the new set
pub fn store_toggle_owned<S: KeyValueStore>(store: &AppStore, owned_store: &OwnedStore<S>, id: u32) {
    let current = store.owned().get_untracked();
    store.owned().set(owned_store.toggle(&current, id));
}

/// Update the search text
pub fn store_set_search(store: &AppStore, text: String) {
    store.view_state().write().search_text = text;
}
