//! Platform session store.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Everything else**: one process-wide [`store::MemoryStore`]

/// Store holding the `token` / `role` keys for this platform.
pub fn make_session_store() -> impl store::SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;

        static SHARED: OnceLock<store::MemoryStore> = OnceLock::new();
        SHARED.get_or_init(store::MemoryStore::new).clone()
    }
}
