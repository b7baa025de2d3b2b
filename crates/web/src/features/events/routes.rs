use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_event, get_event_results, search_events};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/search", get(search_events))
        .route("/:id", get(get_event))
        .route("/:id/results", get(get_event_results))
}
