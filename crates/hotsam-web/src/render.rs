//! HTML rendering for the schedule page.
//!
//! The page template is plain HTML with `{{ name }}` slots. Slots are filled
//! in a single pass, so text inside a substituted value is never re-scanned
//! for further slots. Every piece of data is escaped before it reaches a
//! slot.

use hotsam_core::Fixture;

pub const NEXT_MATCH_SLOT: &str = "next_match_content";
pub const MATCHES_SLOT: &str = "matches_content";
pub const TEAM_SLOT: &str = "team_name";

const NO_UPCOMING: &str = "<p>No upcoming matches scheduled</p>";

/// The data shown on the schedule page.
pub struct Page<'a> {
  pub team:     &'a str,
  pub next:     Option<&'a Fixture>,
  pub fixtures: &'a [Fixture],
}

impl Page<'_> {
  /// Fill `template` with this page's fragments.
  pub fn render(&self, template: &str) -> String {
    let next = self.next_match_html();
    let matches = self.matches_html();
    let team = escape_html(self.team);
    fill_slots(template, |slot| match slot {
      NEXT_MATCH_SLOT => Some(next.as_str()),
      MATCHES_SLOT => Some(matches.as_str()),
      TEAM_SLOT => Some(team.as_str()),
      _ => None,
    })
  }

  fn next_match_html(&self) -> String {
    let Some(f) = self.next else {
      return NO_UPCOMING.to_owned();
    };
    format!(
      r#"
      <div class="space-y-2">
        <p class="text-xl">{headline}</p>
        <p>Competition: {competition}</p>
        <p>Date: {date}</p>
        <p>Location: {location}</p>
      </div>
      "#,
      headline = escape_html(&f.headline(self.team)),
      competition = escape_html(&f.competition),
      date = f.formatted_kickoff(),
      location = f.location_label(),
    )
  }

  fn matches_html(&self) -> String {
    let mut out = String::new();
    for f in self.fixtures {
      out.push_str(&format!(
        r#"
      <div class="border-b pb-4 last:border-b-0">
        <p class="text-lg font-semibold">vs {opponent}</p>
        <p>{competition}</p>
        <p>{date} ({location})</p>
      </div>
      "#,
        opponent = escape_html(&f.opponent),
        competition = escape_html(&f.competition),
        date = f.formatted_kickoff(),
        location = f.location_label(),
      ));
    }
    out
  }
}

/// Replace every `{{ name }}` for which `lookup` returns a value. Unknown
/// slots and unterminated braces are copied through untouched.
pub fn fill_slots<'v>(
  template: &str,
  lookup: impl Fn(&str) -> Option<&'v str>,
) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;
  while let Some(start) = rest.find("{{") {
    out.push_str(&rest[..start]);
    let after_open = &rest[start + 2..];
    let Some(end) = after_open.find("}}") else {
      out.push_str(&rest[start..]);
      return out;
    };
    let name = after_open[..end].trim();
    match lookup(name) {
      Some(value) => out.push_str(value),
      None => out.push_str(&rest[start..start + 2 + end + 2]),
    }
    rest = &after_open[end + 2..];
  }
  out.push_str(rest);
  out
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}
