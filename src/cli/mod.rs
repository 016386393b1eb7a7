// src/cli/mod.rs
//! CLI argument parsing and handlers.

pub mod args;
pub mod merge_handler;

pub use args::Cli;
pub use merge_handler::handle_merge;
