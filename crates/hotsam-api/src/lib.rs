//! JSON REST API for HotSam.
//!
//! Exposes an axum [`Router`] backed by any [`ScheduleStore`].
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", hotsam_api::api_router(store.clone(), clock.clone()))
//! ```

pub mod error;
pub mod fixtures;
pub mod subscribers;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use hotsam_core::{Clock, store::ScheduleStore};

pub use error::ApiError;

/// State shared by the API handlers.
pub struct ApiState<S> {
  pub store: Arc<S>,
  pub clock: Arc<dyn Clock>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
      clock: Arc::clone(&self.clock),
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Router<()>
where
  S: ScheduleStore + 'static,
{
  Router::new()
    .route("/fixtures", get(fixtures::list::<S>))
    .route("/fixtures/next", get(fixtures::next::<S>))
    .route("/subscribers", post(subscribers::create::<S>))
    .with_state(ApiState { store, clock })
}
