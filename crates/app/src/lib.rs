//! Order tracker domain, persistence and chatbot relay.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
