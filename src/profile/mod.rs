// src/profile/mod.rs
//! Reading and writing the Go cover profile format.

pub mod parser;
pub mod writer;

pub use self::parser::{parse_line, parse_profiles, parse_str};
pub use self::writer::{to_text, write_reports, write_text, OutputFormat};
