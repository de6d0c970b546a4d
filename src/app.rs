//! Dex Tracker App
//!
//! Root component: resolves the starting owned set, drives the catalog fetch
//! and lays out header, search bar and grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{CatalogFetcher, GlooTransport};
use crate::browser;
use crate::components::{ItemGrid, OwnedCounter, SearchBar, ShareButton, StatusView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::filter::{filter_items, filter_owned};
use crate::session::initial_owned;
use crate::state::LoadState;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);

    // Share link in the URL wins over saved state
    let owned = initial_owned(&ctx.owned_store(), &browser::page_search(), &config);
    let store = Store::new(AppState::new(owned));

    provide_context(ctx);
    provide_context(store);

    // Fetch on mount and on every retry. A superseded fetch may still land.
    Effect::new(move |_| {
        let attempt = reload_trigger.get();
        store.view_state().update(|v| v.begin_loading());
        spawn_local(async move {
            tracing::info!(attempt, "loading catalog");
            let result = CatalogFetcher::new(GlooTransport, config).fetch_all().await;
            let items = store
                .view_state()
                .try_update(|v| v.complete(result))
                .unwrap_or_default();
            store.items().set(items);
        });
    });

    let visible_items = Memo::new(move |_| {
        let search = store.view_state().read().search_text.clone();
        let matched = filter_items(&store.items().read(), &search);
        filter_owned(matched, &store.owned().read(), store.owned_filter().get())
    });

    let is_ready = move || store.view_state().read().load == LoadState::Ready;

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Dex Tracker"</h1>
                <OwnedCounter />
                <ShareButton />
            </header>

            <SearchBar />

            <main class="main-content">
                <StatusView />
                <Show when=is_ready>
                    <ItemGrid items=visible_items />
                </Show>
            </main>
        </div>
    }
}
