//! Parser configuration.

use serde::Deserialize;

use super::error::{ConfigError, Result};

/// Default limit on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest nesting limit [`ParserConfig`] accepts.
///
/// Each level of nesting costs three parser frames. 512 levels fit in a
/// 2 MiB thread stack (the default for spawned threads) in a debug build;
/// 1024 do not.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Tuning knobs for the parser.
///
/// Deserializable so host applications can embed it in their own settings;
/// missing fields take their defaults. Deserialized values should be checked
/// with [`ParserConfig::validate`]; the parser clamps an out-of-range
/// `max_depth` into `1..=MAX_DEPTH_LIMIT` either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Maximum expression nesting (parentheses and operator right-hand
    /// sides). Deeper input is not descended into; the rest of the
    /// statement is recorded as unknown tokens instead.
    pub max_depth: usize,
}

impl ParserConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `max_depth` is zero or above
    /// [`MAX_DEPTH_LIMIT`].
    pub fn new(max_depth: usize) -> Result<Self> {
        let config = Self { max_depth };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid field.
    pub const fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::MaxDepthTooLarge {
                requested: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }

    /// Returns the configuration with `max_depth` forced into
    /// `1..=MAX_DEPTH_LIMIT`.
    #[must_use]
    pub const fn clamped(self) -> Self {
        let max_depth = if self.max_depth == 0 {
            1
        } else if self.max_depth > MAX_DEPTH_LIMIT {
            MAX_DEPTH_LIMIT
        } else {
            self.max_depth
        };
        Self { max_depth }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
