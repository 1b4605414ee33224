//! Session persistence backed by browser `localStorage`.
//!
//! The session blob lives under a fixed namespace key so a fresh tab or a
//! reload restores the last known session before any network call
//! completes. Requires a browser environment; every operation degrades to
//! a no-op on the server.

use crate::state::session::SessionPersist;

/// Fixed namespace for the persisted session.
pub const STORAGE_KEY: &str = "xplorelct-storage";

/// `localStorage`-backed implementation of [`SessionPersist`].
pub struct LocalStorage;

impl SessionPersist for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(STORAGE_KEY).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, raw);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}
