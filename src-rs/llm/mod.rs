pub mod models;
pub mod outline;
pub mod prompts;
pub mod retry;
pub mod suggestions;

// Re-export config from crate root
pub use crate::config;
