//! Error types and axum `IntoResponse` implementation.

use std::path::PathBuf;

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use hotsam_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),
  #[error("failed to read template {path:?}: {source}")]
  Template {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Validation(e) => {
        (StatusCode::BAD_REQUEST, e.to_string()).into_response()
      }
      Error::Template { .. } => {
        tracing::error!(error = %self, "page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Error loading page")
          .into_response()
      }
      Error::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
