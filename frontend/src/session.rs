//! Per-tab persistence for the certificate download token.
//!
//! The token returned by `POST /validate` lives in the component state while
//! the page is up; this module mirrors it into `sessionStorage` so a reload
//! within the same tab can still claim the download. At most one token is
//! live at a time: a new submit overwrites it, a served download clears it.

use web_sys::Storage;

/// Fixed sessionStorage key holding the current download token.
const STORAGE_KEY: &str = "download_id";

fn storage() -> Option<Storage> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok())
        .flatten()
}

/// Persists `id` as the live token, replacing any previous one.
pub fn store(id: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, id);
    }
}

/// Returns the persisted token, if a submit in this tab produced one.
pub fn load() -> Option<String> {
    storage().and_then(|s| s.get_item(STORAGE_KEY).ok()).flatten()
}

/// Forgets the persisted token (a token is good for one download only).
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
