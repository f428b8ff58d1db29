//! Core types and trait definitions for HotSam.
//!
//! This crate is free of HTTP dependencies. It owns the [`Schedule`]
//! aggregate (fixtures plus subscribers), the subscriber validation rule, and
//! the [`ScheduleStore`] abstraction the HTTP crates are generic over.

pub mod clock;
pub mod error;
pub mod fixture;
pub mod memory;
pub mod schedule;
pub mod store;
pub mod subscriber;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result, ValidationError};
pub use fixture::Fixture;
pub use memory::MemoryStore;
pub use schedule::Schedule;
pub use store::ScheduleStore;
pub use subscriber::{
  NewSubscriber, NotificationPreferences, Subscriber, SubscriptionRequest,
};
