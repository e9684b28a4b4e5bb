//! Persisted bearer-token slot.
//!
//! The token issued by the auth service lives in one named `localStorage`
//! slot so a session survives page reloads. Everything else in the crate
//! goes through the [`TokenStore`] trait, which keeps the session manager
//! and the gateway storage-agnostic; unit tests substitute
//! [`MemoryTokenStore`].

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "memory_palace_token";

/// Read/write access to the single persisted token slot.
pub trait TokenStore {
    /// The stored token, or `None` if absent or the medium is unavailable.
    fn get(&self) -> Option<String>;

    /// Persist a token, replacing any previous one.
    fn set(&self, token: &str);

    /// Remove the stored token, if any.
    fn clear(&self);
}

/// `localStorage`-backed store. Requires a browser environment; on the
/// server every read comes back empty and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            // A failing storage medium reads as "no token": the session
            // resolves to anonymous instead of erroring.
            let window = web_sys::window()?;
            match window.local_storage() {
                Ok(Some(storage)) => storage.get_item(TOKEN_KEY).ok().flatten(),
                _ => None,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }
    }
}

/// In-memory store for unit tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: std::cell::RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
