//! Error types for `hotsam-core`.

use std::path::PathBuf;

use thiserror::Error;

/// Rejection of a subscription request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// Both email and phone were absent or blank after trimming.
  #[error("Please provide either email or phone number")]
  MissingContact,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read fixtures from {path:?}: {source}")]
  FixturesIo {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("store lock poisoned")]
  LockPoisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
