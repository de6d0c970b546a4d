//! Browser Helpers
//!
//! Page location and clipboard access. A missing `window` reads as "no data".

use wasm_bindgen_futures::JsFuture;

/// `location.search` of the current page
pub fn page_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Origin and path of the current page, for building share links
pub fn page_base() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    Some((location.origin().ok()?, location.pathname().ok()?))
}

/// Write text to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
