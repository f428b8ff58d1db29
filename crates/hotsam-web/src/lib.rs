//! HTML front end for HotSam.
//!
//! Exposes an axum [`Router`] serving the schedule page, the subscription
//! form, and the JSON API from `hotsam-api`, backed by any
//! [`ScheduleStore`].

pub mod error;
pub mod handlers;
pub mod render;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Form, Router,
  extract::{State, rejection::FormRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{get, post},
};
use hotsam_core::{Clock, store::ScheduleStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{index, subscribe};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `HOTSAM_*` environment variables. Every key is optional.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// HTML page with `{{ next_match_content }}` and `{{ matches_content }}`
  /// slots. Read on every `GET /`.
  pub template_path: PathBuf,
  pub team_name:     String,
  /// JSON array of fixtures replacing the built-in seed schedule.
  pub fixtures_path: Option<PathBuf>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "0.0.0.0".to_string(),
      port:          5000,
      template_path: PathBuf::from("templates/index.html"),
      team_name:     "Tottenham".to_string(),
      fixtures_path: None,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub clock:  Arc<dyn Clock>,
  pub config: Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:  Arc::clone(&self.store),
      clock:  Arc::clone(&self.clock),
      config: Arc::clone(&self.config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the whole site.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ScheduleStore + 'static,
{
  let api = hotsam_api::api_router(
    Arc::clone(&state.store),
    Arc::clone(&state.clock),
  );

  Router::new()
    .route("/",          get(index_handler::<S>))
    .route("/subscribe", post(subscribe_handler::<S>))
    .with_state(state)
    .nest("/api", api)
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
}

// ─── Route handlers ──────────────────────────────────────────────────────────

async fn index_handler<S>(State(state): State<AppState<S>>) -> Response
where
  S: ScheduleStore + 'static,
{
  index::handler(&state).await.into_response_or_err()
}

async fn subscribe_handler<S>(
  State(state): State<AppState<S>>,
  form: Result<Form<subscribe::FormPairs>, FormRejection>,
) -> Response
where
  S: ScheduleStore + 'static,
{
  subscribe::handler(&state, form).await.into_response_or_err()
}

async fn not_found() -> Response {
  (StatusCode::NOT_FOUND, "Not Found").into_response()
}

// ─── Helper trait ────────────────────────────────────────────────────────────

trait IntoResponseOrErr {
  fn into_response_or_err(self) -> Response;
}

impl<T: IntoResponse> IntoResponseOrErr for Result<T, Error> {
  fn into_response_or_err(self) -> Response {
    match self {
      Ok(r)  => r.into_response(),
      Err(e) => e.into_response(),
    }
  }
}

// ─── Integration tests ────────────────────────────────────────────────────────
