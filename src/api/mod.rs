//! API Lambda handler and request processing

pub mod enhance;
pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use enhance::EnhanceHandler;
pub use handler::function_handler;
pub use helpers::TextResponse;
