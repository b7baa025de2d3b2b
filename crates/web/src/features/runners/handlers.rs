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

pub async fn search_runners(
    State(db): State<Database>,
    Query(params): Query<SearchQuery>,
) -> Result<Response, WebError> {
    if params.q.is_empty() {
        return Err(WebError::BadRequest(
            "Missing query parameter 'q'".to_string(),
        ));
    }

    let runners = services::search_runners(db.pool(), &params.q).await?;

    Ok(Json(runners).into_response())
}

pub async fn get_runner(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let runner = services::get_runner(db.pool(), id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(runner).into_response())
}

pub async fn get_runner_results(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let history = services::get_runner_results(db.pool(), id).await?;

    Ok(Json(history).into_response())
}
