//! Chatbot

pub mod data;
pub mod errors;
pub mod service;
mod upstream;

pub use errors::{ChatbotServiceError, UpstreamFailure};
pub use service::*;
