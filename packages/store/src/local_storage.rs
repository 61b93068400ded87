//! # localStorage session store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] implementation used on the
//! **web platform**. It reads and writes the browser's `window.localStorage`
//! through [`web_sys::Storage`], so the token and role survive page reloads.
//!
//! ## Error handling
//!
//! All trait methods swallow errors: reads return `None` and writes do
//! nothing. Disabled storage reads as "signed out".

use web_sys::Storage;

use crate::session::SessionStore;

/// `window.localStorage`-backed SessionStore for the web platform.
///
/// Zero-size; the storage handle is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
