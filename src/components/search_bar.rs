//! Search Bar Component
//!
//! Free-text search plus the All/Owned/Missing selector.

use leptos::prelude::*;

use crate::filter::OwnedFilter;
use crate::store::{store_set_search, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search by name or number..."
                prop:value=move || store.view_state().read().search_text.clone()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />

            <div class="owned-filter">
                {OwnedFilter::ALL.iter().map(|mode| {
                    let mode = *mode;
                    let is_selected = move || store.owned_filter().get() == mode;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| store.owned_filter().set(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
