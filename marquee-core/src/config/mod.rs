//! Configuration types
//!
//! Board-agnostic configuration structures and the `lights.toml` parser.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError};
pub use types::*;
