//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod completions;
pub mod config;
pub mod documents;
pub mod import;
pub mod info;
pub mod search;

pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use import::ImportArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
