//! API client wiring for the browser.

use std::sync::Arc;

use tracker_client::{ApiClient, ClientConfig, TokenStore, config::DEFAULT_BASE_URL};

/// `localStorage` key holding the bearer token.
#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "authToken";

/// Base URL baked in at build time, falling back to the local dev server.
fn base_url() -> &'static str {
    option_env!("TRACKER_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Build the client every page shares.
pub fn client() -> ApiClient {
    ApiClient::new(ClientConfig::new(base_url()), token_store())
}

#[cfg(target_arch = "wasm32")]
fn token_store() -> Arc<dyn TokenStore> {
    Arc::new(LocalStorageTokens)
}

#[cfg(not(target_arch = "wasm32"))]
fn token_store() -> Arc<dyn TokenStore> {
    Arc::new(tracker_client::MemoryTokenStore::default())
}

/// Bearer token kept in the browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
struct LocalStorageTokens;

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokens {
    fn token(&self) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage()
            && storage.remove_item(TOKEN_KEY).is_err()
        {
            leptos::logging::warn!("failed to clear auth token");
        }
    }
}
