//! Auth-session record and its key-value persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads in `localStorage` (see
//! `util::storage::BrowserStore`). Writers always replace or clear all four
//! fields together so no half-written session is ever observable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub const TOKEN_KEY: &str = "user_token";
pub const API_KEY_KEY: &str = "api_key";
pub const USERNAME_KEY: &str = "user_username";
pub const EMAIL_KEY: &str = "user_email";

/// The persisted authentication state of the current browser user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token (the user id). Present means authenticated.
    pub token: Option<String>,
    /// Secret for the project-generation endpoint.
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.api_key.is_none() && self.username.is_none() && self.email.is_none()
    }
}

/// String key-value storage with page-reload lifetime.
///
/// Implementors only provide raw item access; the session-level operations
/// are shared so every backend writes the same keys.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);

    /// Read the stored session. Empty strings count as absent.
    fn load(&self) -> Session {
        let read = |key| self.get_item(key).filter(|value| !value.is_empty());
        Session {
            token: read(TOKEN_KEY),
            api_key: read(API_KEY_KEY),
            username: read(USERNAME_KEY),
            email: read(EMAIL_KEY),
        }
    }

    /// Overwrite all four fields; `None` fields are removed.
    fn save(&self, session: &Session) {
        for (key, value) in [
            (TOKEN_KEY, &session.token),
            (API_KEY_KEY, &session.api_key),
            (USERNAME_KEY, &session.username),
            (EMAIL_KEY, &session.email),
        ] {
            match value {
                Some(value) => self.set_item(key, value),
                None => self.remove_item(key),
            }
        }
    }

    fn clear(&self) {
        for key in [TOKEN_KEY, API_KEY_KEY, USERNAME_KEY, EMAIL_KEY] {
            self.remove_item(key);
        }
    }
}

/// In-memory store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_session(session: &Session) -> Self {
        let store = Self::default();
        store.save(session);
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
