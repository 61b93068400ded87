pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::GreenGuideConfig;
pub use session::{Session, SessionStore, ADMIN_ROLE, ROLE_KEY, TOKEN_KEY};
