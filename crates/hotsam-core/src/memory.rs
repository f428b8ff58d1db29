//! [`MemoryStore`] — the in-memory implementation of [`ScheduleStore`].

use std::sync::{Arc, RwLock};

use chrono::NaiveDateTime;

use crate::{
  Clock, Error, Fixture, NewSubscriber, Result, Schedule, Subscriber,
  SystemClock, store::ScheduleStore,
};

/// A process-wide schedule guarded by a read/write lock.
///
/// Data is not persisted across restarts. Cloning is cheap; clones share the
/// same schedule.
#[derive(Clone)]
pub struct MemoryStore {
  schedule: Arc<RwLock<Schedule>>,
  clock:    Arc<dyn Clock>,
}

impl MemoryStore {
  pub fn new(schedule: Schedule) -> Self {
    Self::with_clock(schedule, Arc::new(SystemClock))
  }

  /// Use `clock` to stamp new subscribers.
  pub fn with_clock(schedule: Schedule, clock: Arc<dyn Clock>) -> Self {
    Self { schedule: Arc::new(RwLock::new(schedule)), clock }
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new(Schedule::with_sample_fixtures()) }
}

impl ScheduleStore for MemoryStore {
  type Error = Error;

  async fn next_fixture(&self, now: NaiveDateTime) -> Result<Option<Fixture>> {
    let schedule = self.schedule.read().map_err(|_| Error::LockPoisoned)?;
    Ok(schedule.next_fixture(now).cloned())
  }

  async fn list_fixtures(&self) -> Result<Vec<Fixture>> {
    let schedule = self.schedule.read().map_err(|_| Error::LockPoisoned)?;
    Ok(schedule.all_fixtures_sorted().into_iter().cloned().collect())
  }

  async fn add_subscriber(&self, input: NewSubscriber) -> Result<Subscriber> {
    let now = self.clock.now();
    let mut schedule =
      self.schedule.write().map_err(|_| Error::LockPoisoned)?;
    let subscriber = schedule.subscribe(input, now);
    tracing::info!(
      subscriber_id = %subscriber.subscriber_id,
      total = schedule.subscribers().len(),
      "subscriber added"
    );
    Ok(subscriber)
  }

  async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
    let schedule = self.schedule.read().map_err(|_| Error::LockPoisoned)?;
    Ok(schedule.subscribers().to_vec())
  }
}
