//! # Session: the signed-in user's bearer token and role
//!
//! The backend issues a bearer token (and, for privileged accounts, a role
//! string) at login. Both live in browser-local storage under two well-known
//! keys so that a page reload keeps the user signed in:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | bearer token attached to authenticated requests |
//! | [`ROLE_KEY`] (`"role"`) | plain role string; `"admin"` unlocks the admin panel |
//!
//! ## Lifecycle
//!
//! login → [`Session::save`] · every authenticated request → [`Session::load`]
//! · logout → [`Session::clear`]. There is no refresh or expiry handling; a
//! token stays until it is cleared. The last writer wins when several tabs
//! share the same storage.
//!
//! The role only decides what the UI shows. It is not a security boundary;
//! the backend enforces authorization.

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the role string.
pub const ROLE_KEY: &str = "role";

/// Role value that unlocks the admin dashboard.
pub const ADMIN_ROLE: &str = "admin";

/// Synchronous string key/value storage for session data.
///
/// Implementations swallow their own failures: an unavailable backend reads as
/// "nothing stored" and writes become no-ops.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Token and role of the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Option<String>) -> Self {
        Self {
            token: Some(token.into()),
            role,
        }
    }

    /// Read the session from storage. Empty values count as absent.
    pub fn load(store: &impl SessionStore) -> Self {
        let non_empty = |v: String| (!v.is_empty()).then_some(v);
        Self {
            token: store.get(TOKEN_KEY).and_then(non_empty),
            role: store.get(ROLE_KEY).and_then(non_empty),
        }
    }

    /// Persist the session. A missing role removes any stale role entry.
    pub fn save(&self, store: &impl SessionStore) {
        match &self.token {
            Some(token) => store.set(TOKEN_KEY, token),
            None => store.remove(TOKEN_KEY),
        }
        match &self.role {
            Some(role) => store.set(ROLE_KEY, role),
            None => store.remove(ROLE_KEY),
        }
    }

    /// Remove both keys from storage.
    pub fn clear(store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(ROLE_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    /// Token to attach as a bearer credential, if any.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
