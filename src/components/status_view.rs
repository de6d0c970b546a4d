//! Status View Component
//!
//! Loading indicator, or the blocking error with a Retry button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let is_loading = move || store.view_state().read().loading();
    let error = move || store.view_state().read().error_message().map(str::to_string);

    view! {
        <Show when=is_loading>
            <div class="status loading">"Loading catalog..."</div>
        </Show>
        {move || error().map(|message| view! {
            <div class="status error" role="alert">
                <p class="error-message">{message}</p>
                <button type="button" class="retry-btn" on:click=move |_| ctx.reload()>
                    "Retry"
                </button>
            </div>
        })}
    }
}
