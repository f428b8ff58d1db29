//! The [`Schedule`] aggregate: fixtures plus the subscriber log.
//!
//! Everything here is synchronous and lock-free; sharing a schedule between
//! requests is the job of a [`ScheduleStore`](crate::store::ScheduleStore).

use chrono::{Local, NaiveDateTime};

use crate::{
  Fixture, NewSubscriber, Subscriber, SubscriptionRequest, ValidationError,
  fixture::sample_fixtures,
};

#[derive(Debug, Clone, Default)]
pub struct Schedule {
  fixtures:    Vec<Fixture>,
  subscribers: Vec<Subscriber>,
}

impl Schedule {
  /// A schedule over `fixtures` with no subscribers.
  pub fn new(fixtures: Vec<Fixture>) -> Self {
    Self { fixtures, subscribers: Vec::new() }
  }

  /// A schedule seeded with the built-in fixtures.
  pub fn with_sample_fixtures() -> Self { Self::new(sample_fixtures()) }

  /// The earliest fixture whose kickoff is strictly after `now`.
  ///
  /// When several fixtures share the earliest kickoff the first one in
  /// insertion order wins.
  pub fn next_fixture(&self, now: NaiveDateTime) -> Option<&Fixture> {
    self
      .fixtures
      .iter()
      .filter(|f| f.kickoff > now)
      .fold(None, |best: Option<&Fixture>, f| match best {
        Some(b) if b.kickoff <= f.kickoff => Some(b),
        _ => Some(f),
      })
  }

  /// All fixtures in ascending kickoff order. The sort is stable.
  pub fn all_fixtures_sorted(&self) -> Vec<&Fixture> {
    let mut sorted: Vec<&Fixture> = self.fixtures.iter().collect();
    sorted.sort_by_key(|f| f.kickoff);
    sorted
  }

  /// Validate and record a contact, stamped with the current local time.
  pub fn add_subscriber(
    &mut self,
    email: Option<&str>,
    phone: Option<&str>,
  ) -> Result<Subscriber, ValidationError> {
    let new = NewSubscriber::parse(SubscriptionRequest::contact(email, phone))?;
    Ok(self.subscribe(new, Local::now().naive_local()))
  }

  /// Append an already-validated subscriber.
  pub fn subscribe(
    &mut self,
    new: NewSubscriber,
    at: NaiveDateTime,
  ) -> Subscriber {
    let subscriber = Subscriber::from_new(new, at);
    self.subscribers.push(subscriber.clone());
    subscriber
  }

  pub fn fixtures(&self) -> &[Fixture] { &self.fixtures }

  pub fn subscribers(&self) -> &[Subscriber] { &self.subscribers }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day)
      .unwrap()
      .and_hms_opt(hour, min, 0)
      .unwrap()
  }

  fn fixture(opponent: &str, kickoff: NaiveDateTime) -> Fixture {
    Fixture::new(opponent, "Premier League", kickoff, true)
  }

  // ── next_fixture ────────────────────────────────────────────────────────

  #[test]
  fn next_fixture_picks_earliest_future_match() {
    let schedule = Schedule::with_sample_fixtures();
    let next = schedule.next_fixture(at(10, 0, 0)).unwrap();
    assert_eq!(next.opponent, "Manchester United");
    assert_eq!(next.formatted_kickoff(), "2025-03-16 20:00");
  }

  #[test]
  fn next_fixture_is_none_when_all_in_past() {
    let schedule = Schedule::with_sample_fixtures();
    assert!(schedule.next_fixture(at(31, 0, 0)).is_none());
  }

  #[test]
  fn next_fixture_excludes_kickoff_equal_to_now() {
    let schedule = Schedule::with_sample_fixtures();
    let next = schedule.next_fixture(at(16, 20, 0)).unwrap();
    assert_eq!(next.opponent, "Liverpool");
  }

  #[test]
  fn next_fixture_ignores_insertion_order() {
    let schedule = Schedule::new(vec![
      fixture("Late", at(28, 15, 0)),
      fixture("Early", at(12, 15, 0)),
      fixture("Past", at(1, 15, 0)),
    ]);
    assert_eq!(schedule.next_fixture(at(5, 0, 0)).unwrap().opponent, "Early");
  }

  #[test]
  fn next_fixture_tie_prefers_first_inserted() {
    let schedule = Schedule::new(vec![
      fixture("First", at(12, 15, 0)),
      fixture("Second", at(12, 15, 0)),
    ]);
    assert_eq!(schedule.next_fixture(at(5, 0, 0)).unwrap().opponent, "First");
  }

  #[test]
  fn next_fixture_on_empty_schedule() {
    assert!(Schedule::default().next_fixture(at(1, 0, 0)).is_none());
  }

  // ── all_fixtures_sorted ─────────────────────────────────────────────────

  #[test]
  fn sorted_fixtures_are_ascending_and_complete() {
    let schedule = Schedule::new(vec![
      fixture("C", at(30, 16, 0)),
      fixture("A", at(2, 15, 30)),
      fixture("B", at(16, 20, 0)),
    ]);
    let sorted = schedule.all_fixtures_sorted();
    let names: Vec<&str> = sorted.iter().map(|f| f.opponent.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(sorted.windows(2).all(|w| w[0].kickoff <= w[1].kickoff));
  }

  #[test]
  fn sort_is_stable_for_equal_kickoffs() {
    let schedule = Schedule::new(vec![
      fixture("Later", at(20, 15, 0)),
      fixture("Tie-1", at(10, 15, 0)),
      fixture("Tie-2", at(10, 15, 0)),
    ]);
    let names: Vec<&str> = schedule
      .all_fixtures_sorted()
      .iter()
      .map(|f| f.opponent.as_str())
      .collect();
    assert_eq!(names, ["Tie-1", "Tie-2", "Later"]);
  }

  #[test]
  fn sorting_is_idempotent_and_does_not_reorder_storage() {
    let schedule = Schedule::new(vec![
      fixture("B", at(16, 20, 0)),
      fixture("A", at(2, 15, 30)),
    ]);
    assert_eq!(schedule.all_fixtures_sorted(), schedule.all_fixtures_sorted());
    assert_eq!(schedule.fixtures()[0].opponent, "B");
  }

  // ── add_subscriber ──────────────────────────────────────────────────────

  #[test]
  fn add_subscriber_requires_a_contact() {
    let mut schedule = Schedule::with_sample_fixtures();
    assert_eq!(
      schedule.add_subscriber(None, None).unwrap_err(),
      ValidationError::MissingContact
    );
    assert_eq!(
      schedule.add_subscriber(Some(""), Some("   ")).unwrap_err(),
      ValidationError::MissingContact
    );
    assert!(schedule.subscribers().is_empty());
  }

  #[test]
  fn add_subscriber_stores_email() {
    let mut schedule = Schedule::with_sample_fixtures();
    let sub = schedule.add_subscriber(Some("a@b.com"), None).unwrap();
    assert_eq!(sub.email.as_deref(), Some("a@b.com"));
    assert_eq!(sub.phone, None);
    assert_eq!(schedule.subscribers(), [sub]);
  }

  #[test]
  fn subscribers_keep_insertion_order() {
    let mut schedule = Schedule::default();
    schedule.add_subscriber(Some("one@example.com"), None).unwrap();
    schedule.add_subscriber(None, Some("+440000")).unwrap();
    let subs = schedule.subscribers();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].email.as_deref(), Some("one@example.com"));
    assert_eq!(subs[1].phone.as_deref(), Some("+440000"));
  }
}
