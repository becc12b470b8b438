use thiserror::Error;

/// Default cap on the number of values in one checked sequence.
const DEFAULT_MAX_LEN: usize = 1_000_000;

/// Validation settings for [`try_generate`](crate::try_generate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_len: usize,
}

/// Errors that can occur when creating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_len must be at least 1")]
    ZeroMaxLen,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Config {
    /// Creates a config that allows at most `max_len` values per sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxLen`] if `max_len` is zero.
    pub fn new(max_len: usize) -> Result<Self, ConfigError> {
        if max_len == 0 {
            return Err(ConfigError::ZeroMaxLen);
        }

        Ok(Self { max_len })
    }

    /// Returns the maximum number of values a checked sequence may hold.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}
