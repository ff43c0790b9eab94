//! Configuration and wire models shared by the handler and the client

pub mod config;
pub mod models;
