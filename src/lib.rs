pub mod analyzer;
pub mod config;
pub mod docs;
pub mod errors;
pub mod generator;
pub mod response_formatter;
pub mod samples;
pub mod service;
pub mod tool_router;
pub mod types;

// Re-export commonly used types
pub use types::*;
