//! All AI/LLM functionality

pub mod client;
pub mod completer;

// Re-export main types for convenience
pub use client::AzureOpenAiClient;
pub use completer::{ChatCompleter, user_turn};
