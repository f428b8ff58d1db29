//! Fixture — one scheduled match.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Display format for kickoff times.
pub const KICKOFF_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A scheduled match. Immutable once the schedule is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
  pub opponent:    String,
  pub competition: String,
  /// Local wall-clock kickoff time.
  pub kickoff:     NaiveDateTime,
  pub is_home:     bool,
}

impl Fixture {
  pub fn new(
    opponent: impl Into<String>,
    competition: impl Into<String>,
    kickoff: NaiveDateTime,
    is_home: bool,
  ) -> Self {
    Self {
      opponent: opponent.into(),
      competition: competition.into(),
      kickoff,
      is_home,
    }
  }

  /// `"home"` or `"away"`.
  pub fn location_label(&self) -> &'static str {
    if self.is_home { "home" } else { "away" }
  }

  /// Kickoff rendered as `YYYY-MM-DD HH:MM`.
  pub fn formatted_kickoff(&self) -> String {
    self.kickoff.format(KICKOFF_FORMAT).to_string()
  }

  /// Headline from the team's perspective: the home side is named first.
  pub fn headline(&self, team: &str) -> String {
    if self.is_home {
      format!("{team} vs {}", self.opponent)
    } else {
      format!("{} vs {team}", self.opponent)
    }
  }

  /// Read a JSON array of fixtures from `path`.
  pub fn load_all(path: &Path) -> Result<Vec<Fixture>> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
      Error::FixturesIo { path: path.to_path_buf(), source }
    })?;
    let fixtures: Vec<Fixture> = serde_json::from_str(&raw)?;
    tracing::debug!(count = fixtures.len(), ?path, "loaded fixtures");
    Ok(fixtures)
  }
}

/// The built-in seed schedule.
pub fn sample_fixtures() -> Vec<Fixture> {
  vec![
    Fixture::new("Arsenal", "Premier League", at(2025, 3, 2, 15, 30), true),
    Fixture::new("Manchester United", "FA Cup", at(2025, 3, 16, 20, 0), false),
    Fixture::new("Liverpool", "Premier League", at(2025, 3, 30, 16, 0), true),
  ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
  NaiveDate::from_ymd_opt(year, month, day)
    .and_then(|d| d.and_hms_opt(hour, min, 0))
    .expect("seed fixture dates are valid")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_kickoff_and_location() {
    let f = Fixture::new("Arsenal", "Premier League", at(2025, 3, 2, 15, 30), true);
    assert_eq!(f.formatted_kickoff(), "2025-03-02 15:30");
    assert_eq!(f.location_label(), "home");

    let away = Fixture { is_home: false, ..f };
    assert_eq!(away.location_label(), "away");
  }

  #[test]
  fn headline_puts_home_side_first() {
    let seed = sample_fixtures();
    assert_eq!(seed[0].headline("Tottenham"), "Tottenham vs Arsenal");
    assert_eq!(seed[1].headline("Tottenham"), "Manchester United vs Tottenham");
  }

  #[test]
  fn seed_fixtures_have_expected_kickoffs() {
    let kickoffs: Vec<String> =
      sample_fixtures().iter().map(Fixture::formatted_kickoff).collect();
    assert_eq!(kickoffs, [
      "2025-03-02 15:30",
      "2025-03-16 20:00",
      "2025-03-30 16:00",
    ]);
  }

  #[test]
  fn fixtures_deserialize_from_json() {
    let json = r#"[
      {"opponent":"Chelsea","competition":"League Cup","kickoff":"2025-04-01T19:45:00","is_home":false}
    ]"#;
    let fixtures: Vec<Fixture> = serde_json::from_str(json).unwrap();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].opponent, "Chelsea");
    assert_eq!(fixtures[0].formatted_kickoff(), "2025-04-01 19:45");
    assert!(!fixtures[0].is_home);
  }

  #[test]
  fn load_all_reports_missing_file() {
    let err = Fixture::load_all(Path::new("/nonexistent/fixtures.json"))
      .unwrap_err();
    assert!(matches!(err, Error::FixturesIo { .. }), "{err}");
  }
}
