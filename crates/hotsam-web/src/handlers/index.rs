//! `GET /` — the schedule page.

use axum::response::Html;
use hotsam_core::store::ScheduleStore;

use crate::{AppState, error::Error, render::Page};

pub async fn handler<S>(state: &AppState<S>) -> Result<Html<String>, Error>
where
  S: ScheduleStore + 'static,
{
  let now = state.clock.now();
  let fixtures = state
    .store
    .list_fixtures()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  let next = state
    .store
    .next_fixture(now)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let path = &state.config.template_path;
  let template = tokio::fs::read_to_string(path)
    .await
    .map_err(|source| Error::Template { path: path.clone(), source })?;

  let page = Page {
    team:     &state.config.team_name,
    next:     next.as_ref(),
    fixtures: &fixtures,
  };
  tracing::debug!(
    fixtures = fixtures.len(),
    next = ?next.as_ref().map(|f| f.opponent.as_str()),
    "rendering schedule page"
  );
  Ok(Html(page.render(&template)))
}
