//! Share Button Component
//!
//! Copies a link carrying the owned set to the clipboard and briefly confirms.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::AppContext;
use crate::share;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShareButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (copied, set_copied) = signal(false);
    let config = ctx.config;

    let on_share = move |_| {
        let Some((origin, path)) = browser::page_base() else {
            tracing::warn!("no page location, cannot build share link");
            return;
        };
        let token = share::encode(&store.owned().get_untracked(), config.catalog_size);
        let url = share::share_url(&origin, &path, config.share_param, &token);

        spawn_local(async move {
            match browser::copy_to_clipboard(&url).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(config.copy_confirm_ms).await;
                    set_copied.set(false);
                }
                Err(e) => tracing::warn!(error = %e, "clipboard write failed"),
            }
        });
    };

    view! {
        <button
            type="button"
            class=move || if copied.get() { "share-btn copied" } else { "share-btn" }
            on:click=on_share
        >
            {move || if copied.get() { "Link copied!" } else { "Share" }}
        </button>
    }
}
