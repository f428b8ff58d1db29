//! Subscriber — a contact registered for match notifications.
//!
//! [`SubscriptionRequest`] is the raw, untrusted input shared by the HTML
//! form and the JSON API. [`NewSubscriber::parse`] is the only way to get a
//! validated value, so a [`Subscriber`] without a contact cannot exist.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ValidationError;

// ─── Preferences ─────────────────────────────────────────────────────────────

/// Which notifications a subscriber asked for. Flags missing from input take
/// their [`Default`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
  pub email:              bool,
  pub sms:                bool,
  /// Reminder ten minutes before kickoff.
  pub ten_minute_warning: bool,
}

impl Default for NotificationPreferences {
  fn default() -> Self {
    Self { email: true, sms: false, ten_minute_warning: true }
  }
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// Unvalidated subscription input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionRequest {
  pub email:       Option<String>,
  pub phone:       Option<String>,
  pub timezone:    Option<String>,
  /// `None` means the client expressed no preference.
  pub preferences: Option<NotificationPreferences>,
}

impl SubscriptionRequest {
  pub fn contact(email: Option<&str>, phone: Option<&str>) -> Self {
    Self {
      email: email.map(str::to_owned),
      phone: phone.map(str::to_owned),
      ..Self::default()
    }
  }
}

// ─── Validated ───────────────────────────────────────────────────────────────

/// A subscription that has passed validation but is not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscriber {
  pub email:       Option<String>,
  pub phone:       Option<String>,
  pub timezone:    Option<String>,
  pub preferences: NotificationPreferences,
}

impl NewSubscriber {
  /// Trim every text field; fail if neither email nor phone survives.
  pub fn parse(req: SubscriptionRequest) -> Result<Self, ValidationError> {
    let email = non_blank(req.email);
    let phone = non_blank(req.phone);
    if email.is_none() && phone.is_none() {
      return Err(ValidationError::MissingContact);
    }
    Ok(Self {
      email,
      phone,
      timezone: non_blank(req.timezone),
      preferences: req.preferences.unwrap_or_default(),
    })
  }
}

fn non_blank(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_owned())
    .filter(|v| !v.is_empty())
}

// ─── Stored ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
  pub subscriber_id: Uuid,
  pub email:         Option<String>,
  pub phone:         Option<String>,
  pub timezone:      Option<String>,
  pub preferences:   NotificationPreferences,
  pub subscribed_at: NaiveDateTime,
}

impl Subscriber {
  pub fn from_new(new: NewSubscriber, subscribed_at: NaiveDateTime) -> Self {
    Self {
      subscriber_id: Uuid::new_v4(),
      email: new.email,
      phone: new.phone,
      timezone: new.timezone,
      preferences: new.preferences,
      subscribed_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_both_contacts_is_rejected() {
    let err = NewSubscriber::parse(SubscriptionRequest::contact(None, None))
      .unwrap_err();
    assert_eq!(err, ValidationError::MissingContact);
  }

  #[test]
  fn whitespace_only_counts_as_empty() {
    let err = NewSubscriber::parse(SubscriptionRequest::contact(
      Some(""),
      Some("   "),
    ))
    .unwrap_err();
    assert_eq!(err, ValidationError::MissingContact);
  }

  #[test]
  fn values_are_trimmed() {
    let new = NewSubscriber::parse(SubscriptionRequest {
      email:       Some("  fan@example.com ".into()),
      phone:       Some(" ".into()),
      timezone:    Some(" Europe/London ".into()),
      preferences: None,
    })
    .unwrap();
    assert_eq!(new.email.as_deref(), Some("fan@example.com"));
    assert_eq!(new.phone, None);
    assert_eq!(new.timezone.as_deref(), Some("Europe/London"));
  }

  #[test]
  fn phone_alone_is_enough() {
    let new =
      NewSubscriber::parse(SubscriptionRequest::contact(None, Some("+441234")))
        .unwrap();
    assert_eq!(new.phone.as_deref(), Some("+441234"));
    assert_eq!(new.email, None);
  }

  #[test]
  fn preferences_default_when_unspecified() {
    let new =
      NewSubscriber::parse(SubscriptionRequest::contact(Some("a@b.com"), None))
        .unwrap();
    assert_eq!(new.preferences, NotificationPreferences {
      email:              true,
      sms:                false,
      ten_minute_warning: true,
    });
  }

  #[test]
  fn explicit_preferences_are_kept() {
    let prefs = NotificationPreferences {
      email:              false,
      sms:                true,
      ten_minute_warning: false,
    };
    let new = NewSubscriber::parse(SubscriptionRequest {
      phone: Some("+441234".into()),
      preferences: Some(prefs),
      ..SubscriptionRequest::default()
    })
    .unwrap();
    assert_eq!(new.preferences, prefs);
  }

  #[test]
  fn partial_preferences_fill_from_defaults() {
    let prefs: NotificationPreferences =
      serde_json::from_str(r#"{"sms":true}"#).unwrap();
    assert_eq!(prefs, NotificationPreferences {
      email:              true,
      sms:                true,
      ten_minute_warning: true,
    });
  }
}
