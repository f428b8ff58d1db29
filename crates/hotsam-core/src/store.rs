//! The `ScheduleStore` trait.
//!
//! Implemented by storage backends (currently only [`MemoryStore`]).
//! The HTTP crates depend on this abstraction, not on a concrete backend.
//!
//! [`MemoryStore`]: crate::memory::MemoryStore

use std::future::Future;

use chrono::NaiveDateTime;

use crate::{Fixture, NewSubscriber, Subscriber};

/// Abstraction over a shared, long-lived schedule.
///
/// Subscriber writes must be serialised against each other and against
/// reads. All methods return `Send` futures so the trait can be used from
/// axum handlers on a multi-threaded runtime.
pub trait ScheduleStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The earliest fixture kicking off strictly after `now`.
  fn next_fixture(
    &self,
    now: NaiveDateTime,
  ) -> impl Future<Output = Result<Option<Fixture>, Self::Error>> + Send + '_;

  /// Every fixture, ascending by kickoff.
  fn list_fixtures(
    &self,
  ) -> impl Future<Output = Result<Vec<Fixture>, Self::Error>> + Send + '_;

  /// Append a validated subscriber. The store sets `subscribed_at`.
  fn add_subscriber(
    &self,
    input: NewSubscriber,
  ) -> impl Future<Output = Result<Subscriber, Self::Error>> + Send + '_;

  /// Every subscriber in registration order.
  fn list_subscribers(
    &self,
  ) -> impl Future<Output = Result<Vec<Subscriber>, Self::Error>> + Send + '_;
}
