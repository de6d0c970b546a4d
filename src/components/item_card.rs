//! Item Card Component
//!
//! One grid cell. Click, Enter or Space toggles ownership.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Item;
use crate::store::{store_toggle_owned, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id;
    let is_owned = move || store.owned().read().contains(id);
    let toggle = move || store_toggle_owned(&store, &ctx.owned_store(), id);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            toggle();
        }
    };

    let name = item.display_name();
    let picture = match item.sprite_url.clone() {
        Some(src) => view! { <img class="item-sprite" src=src alt=name.clone() loading="lazy" /> }.into_any(),
        None => view! { <div class="item-sprite placeholder">"?"</div> }.into_any(),
    };

    view! {
        <div
            class=move || if is_owned() { "item-card owned" } else { "item-card" }
            role="button"
            tabindex="0"
            aria-pressed=move || is_owned().to_string()
            on:click=move |_| toggle()
            on:keydown=on_keydown
        >
            {picture}
            <span class="item-number">{item.display_number()}</span>
            <span class="item-name">{name}</span>
        </div>
    }
}
