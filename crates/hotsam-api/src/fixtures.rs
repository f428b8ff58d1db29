//! Handlers for `/fixtures` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/fixtures` | All fixtures, ascending by kickoff |
//! | `GET`  | `/fixtures/next` | 404 if nothing is scheduled after now |

use axum::{Json, extract::State};
use hotsam_core::{Fixture, store::ScheduleStore};

use crate::{ApiState, error::ApiError};

/// `GET /fixtures`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Fixture>>, ApiError>
where
  S: ScheduleStore,
{
  let fixtures = state
    .store
    .list_fixtures()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(fixtures))
}

/// `GET /fixtures/next`
pub async fn next<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Fixture>, ApiError>
where
  S: ScheduleStore,
{
  let fixture = state
    .store
    .next_fixture(state.clock.now())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("no upcoming fixtures".to_owned()))?;
  Ok(Json(fixture))
}
