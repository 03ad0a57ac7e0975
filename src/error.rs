// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Usage Error: {0}")]
    Usage(#[from] UsageError),
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
}

/// The queue API was reached outside of an established queue scope.
///
/// Fatal to the calling code path: callers are expected to surface it,
/// not retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A queue was created without a tokio runtime to run its timers on.
    #[error("notification queue requires a running tokio runtime")]
    NoRuntime,
    /// A handle outlived the queue that issued it.
    #[error("notification queue scope has ended")]
    ScopeEnded,
}

/// A notification spec that cannot be turned into a queue entry.
///
/// Rejected at `add` time; the queue is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duration must not be negative (got {0} ms)")]
    NegativeDuration(i64),
}

impl Error {
    /// Returns true for errors caused by calling the queue outside its scope.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }

    /// Returns true for rejected notification specs.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
