//! Browser `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue so the session manager never touches
//! `window` directly. Outside the browser every read misses and every write
//! is dropped, which makes a non-csr build behave as permanently logged out.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::auth::SessionStore;

/// `window.localStorage` session store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Log a failed storage mutation; the session keeps running on what it holds
/// in memory. Returns whether the mutation succeeded.
#[cfg(any(feature = "csr", test))]
fn warn_on_failure<E: std::fmt::Debug>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("localStorage {action} failed for {key}: {err:?}");
            false
        }
    }
}

impl SessionStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            warn_on_failure("write", key, storage.set_item(key, value));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                warn_on_failure("remove", key, storage.remove_item(key));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
