//! Data models
//!
//! Shared between the todo client, the mock backend and the CLI.

pub mod todo;

// Re-exports
pub use todo::*;
