//! Item Grid Component

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::models::Item;

#[component]
pub fn ItemGrid(items: Memo<Vec<Item>>) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|items| !items.is_empty())
            fallback=|| view! { <p class="empty-grid">"No matches."</p> }
        >
            <div class="item-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>
        </Show>
    }
}
