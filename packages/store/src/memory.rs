use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, ROLE_KEY, TOKEN_KEY};

    #[test]
    fn test_empty_store_has_no_session() {
        let store = MemoryStore::new();
        let session = Session::load(&store);

        assert_eq!(session, Session::default());
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
        assert!(session.bearer().is_none());
    }

    #[test]
    fn test_save_and_load_session() {
        let store = MemoryStore::new();
        Session::new("abc123", Some("user".to_string())).save(&store);

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("user"));

        let session = Session::load(&store);
        assert!(session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(session.bearer(), Some("abc123"));
    }

    #[test]
    fn test_admin_role() {
        let store = MemoryStore::new();
        Session::new("t", Some("admin".to_string())).save(&store);

        assert!(Session::load(&store).is_admin());
    }

    #[test]
    fn test_role_alone_is_not_logged_in() {
        let store = MemoryStore::new();
        store.set(ROLE_KEY, "admin");

        let session = Session::load(&store);
        assert!(!session.is_logged_in());
        assert!(session.is_admin());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");

        let session = Session::load(&store);
        assert!(session.token.is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_save_without_role_removes_stale_role() {
        let store = MemoryStore::new();
        Session::new("first", Some("admin".to_string())).save(&store);
        Session::new("second", None).save(&store);

        let session = Session::load(&store);
        assert_eq!(session.token.as_deref(), Some("second"));
        assert!(session.role.is_none());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStore::new();
        Session::new("abc", Some("admin".to_string())).save(&store);
        store.set("unrelated", "kept");

        Session::clear(&store);

        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(ROLE_KEY).is_none());
        assert_eq!(store.get("unrelated").as_deref(), Some("kept"));
    }

    #[test]
    fn test_clones_share_storage() {
        let store = MemoryStore::new();
        let other = store.clone();

        Session::new("shared", None).save(&store);

        assert_eq!(Session::load(&other).bearer(), Some("shared"));
    }
}
