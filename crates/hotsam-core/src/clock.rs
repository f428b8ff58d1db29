//! Wall-clock source for "now".
//!
//! Kickoff times are local wall-clock values, so "now" is the host's local
//! time with the offset dropped.

use chrono::{Local, NaiveDateTime};

pub trait Clock: Send + Sync {
  fn now(&self) -> NaiveDateTime;
}

/// The host clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> NaiveDateTime { Local::now().naive_local() }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
  fn now(&self) -> NaiveDateTime { self.0 }
}
