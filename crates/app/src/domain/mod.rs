//! Order Tracker Domain Concerns

pub mod chatbot;
pub mod orders;
