use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::Database;

use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search_events(
    State(db): State<Database>,
    Query(params): Query<SearchQuery>,
) -> Result<Response, WebError> {
    if params.q.is_empty() {
        return Err(WebError::BadRequest(
            "Missing query parameter 'q'".to_string(),
        ));
    }

    let events = services::search_events(db.pool(), &params.q).await?;

    Ok(Json(events).into_response())
}

pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(event).into_response())
}

pub async fn get_event_results(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let results = services::get_event_results(db.pool(), id).await?;

    Ok(Json(results).into_response())
}
