use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_runner, get_runner_results, search_runners};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/search", get(search_runners))
        .route("/:id", get(get_runner))
        .route("/:id/results", get(get_runner_results))
}
