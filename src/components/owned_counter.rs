//! Owned Counter Component
//!
//! "<owned> / <catalog size> owned" in the header.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OwnedCounter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let total = ctx.config.catalog_size;

    view! {
        <p class="owned-count">
            {move || format!("{} / {} owned", store.owned().read().len(), total)}
        </p>
    }
}
