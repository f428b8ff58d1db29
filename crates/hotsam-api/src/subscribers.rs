//! Handler for `POST /subscribers`.
//!
//! Body: `{"email": "...", "phone": "...", "timezone": "...",
//! "preferences": {"email": true, "sms": false, "ten_minute_warning": true}}`.
//! Every field is optional, but at least one of `email`/`phone` must be
//! non-blank.

use axum::{
  Json, extract::State, http::StatusCode, response::IntoResponse,
};
use hotsam_core::{NewSubscriber, SubscriptionRequest, store::ScheduleStore};

use crate::{ApiState, error::ApiError};

/// `POST /subscribers` — returns 201 + the stored subscriber.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<SubscriptionRequest>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ScheduleStore,
{
  let new = NewSubscriber::parse(body)?;
  let subscriber = state
    .store
    .add_subscriber(new)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(subscriber)))
}
