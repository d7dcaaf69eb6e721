//! Parser configuration errors.
//!
//! Parsing itself never fails; malformed input is recorded in the tree.
//! The only fallible step is validating a [`ParserConfig`](super::ParserConfig).

/// Errors from validating a parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A nesting limit of zero would reject every expression.
    #[error("max_depth must be at least 1")]
    ZeroMaxDepth,

    /// The nesting limit would overflow a 2 MiB thread stack in a debug
    /// build.
    #[error("max_depth {requested} exceeds the supported limit of {limit}")]
    MaxDepthTooLarge {
        /// The requested limit.
        requested: usize,
        /// The largest accepted limit.
        limit: usize,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
