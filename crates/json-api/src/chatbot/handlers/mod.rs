//! Chatbot Handlers

pub(crate) mod relay;
