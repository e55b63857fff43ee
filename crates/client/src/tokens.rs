//! Bearer token storage

use std::sync::{Mutex, PoisonError};

/// Where the bearer token is read from before each request.
///
/// The token is written by whatever signs the user in; the client only reads it and clears it
/// on 401.
pub trait TokenStore: Send + Sync {
    /// The current token, if any.
    fn token(&self) -> Option<String>;

    /// Forget the token.
    fn clear(&self);
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// A store already holding `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
