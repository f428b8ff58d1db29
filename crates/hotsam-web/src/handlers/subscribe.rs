//! `POST /subscribe` — the subscription form.
//!
//! Fields: `email`, `phone`, `timezone`, the checkboxes `notify_email`,
//! `notify_sms`, `notify_10min`, and the hidden `notify_prefs` marker the page
//! sends alongside them. When a key repeats, its first value wins. A body that
//! cannot be decoded is treated as if every field were empty.

use axum::{
  Form,
  extract::rejection::FormRejection,
  response::Redirect,
};
use hotsam_core::{
  NewSubscriber, NotificationPreferences, SubscriptionRequest,
  store::ScheduleStore,
};

use crate::{AppState, error::Error};

/// Raw form body as decoded `key=value` pairs, in body order.
pub type FormPairs = Vec<(String, String)>;

#[derive(Debug, Default)]
pub struct SubscribeForm {
  pub email:        Option<String>,
  pub phone:        Option<String>,
  pub timezone:     Option<String>,
  pub notify_email: Option<String>,
  pub notify_sms:   Option<String>,
  pub notify_10min: Option<String>,
  /// Set when the checkboxes were rendered, so absent boxes mean unticked.
  pub notify_prefs: Option<String>,
}

impl FromIterator<(String, String)> for SubscribeForm {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
    let mut form = Self::default();
    for (key, value) in pairs {
      let slot = match key.as_str() {
        "email" => &mut form.email,
        "phone" => &mut form.phone,
        "timezone" => &mut form.timezone,
        "notify_email" => &mut form.notify_email,
        "notify_sms" => &mut form.notify_sms,
        "notify_10min" => &mut form.notify_10min,
        "notify_prefs" => &mut form.notify_prefs,
        _ => continue,
      };
      slot.get_or_insert(value);
    }
    form
  }
}

impl SubscribeForm {
  /// Checkbox state, or `None` when the form carried neither the marker nor
  /// any checkbox.
  fn preferences(&self) -> Option<NotificationPreferences> {
    let fields = [
      &self.notify_prefs,
      &self.notify_email,
      &self.notify_sms,
      &self.notify_10min,
    ];
    if fields.iter().all(|f| f.is_none()) {
      return None;
    }
    Some(NotificationPreferences {
      email:              is_checked(&self.notify_email),
      sms:                is_checked(&self.notify_sms),
      ten_minute_warning: is_checked(&self.notify_10min),
    })
  }
}

impl From<SubscribeForm> for SubscriptionRequest {
  fn from(form: SubscribeForm) -> Self {
    let preferences = form.preferences();
    SubscriptionRequest {
      email: form.email,
      phone: form.phone,
      timezone: form.timezone,
      preferences,
    }
  }
}

fn is_checked(value: &Option<String>) -> bool {
  value.as_deref().is_some_and(|v| {
    matches!(
      v.trim().to_ascii_lowercase().as_str(),
      "on" | "true" | "1" | "yes"
    )
  })
}

pub async fn handler<S>(
  state: &AppState<S>,
  form: Result<Form<FormPairs>, FormRejection>,
) -> Result<Redirect, Error>
where
  S: ScheduleStore + 'static,
{
  let form: SubscribeForm = match form {
    Ok(Form(pairs)) => pairs.into_iter().collect(),
    Err(rejection) => {
      tracing::debug!(%rejection, "undecodable subscription form");
      SubscribeForm::default()
    }
  };

  let new = NewSubscriber::parse(form.into()).inspect_err(|e| {
    tracing::info!(reason = %e, "subscription rejected");
  })?;
  state
    .store
    .add_subscriber(new)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  Ok(Redirect::to("/"))
}
