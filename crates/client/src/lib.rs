//! Typed HTTP client for the order tracker API.
//!
//! Every request passes through the same interceptors: the stored bearer token is attached
//! when present, requests and responses are logged, and a 401 clears the stored token.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod tokens;

mod interceptors;

#[cfg(test)]
mod test;

pub use client::{ApiClient, ChatbotApi, OrdersApi};
pub use config::ClientConfig;
pub use errors::ClientError;
pub use tokens::{MemoryTokenStore, TokenStore};
