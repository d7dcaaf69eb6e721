//! Unordered SQL parser
//!
//! A hand-written recursive descent parser for statements and clauses, with
//! precedence climbing for expressions and token-level error recovery.

mod config;
mod error;
mod parser;

pub use config::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, ParserConfig};
pub use error::{ConfigError, Result};
pub use parser::Parser;
