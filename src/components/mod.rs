//! UI Components
//!
//! Leptos components for the catalog grid.

mod item_card;
mod item_grid;
mod owned_counter;
mod search_bar;
mod share_button;
mod status_view;

pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use owned_counter::OwnedCounter;
pub use search_bar::SearchBar;
pub use share_button::ShareButton;
pub use status_view::StatusView;
