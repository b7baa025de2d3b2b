use sqlx::MySqlPool;
use storage::{
    error::Result,
    models::{CompetitionEvent, RunnerResult},
    repository::event::EventRepository,
    services::events,
};

/// Search events by their own name or their competition's name,
/// most recent start date first
pub async fn search_events(pool: &MySqlPool, fragment: &str) -> Result<Vec<CompetitionEvent>> {
    events::search_events(pool, fragment).await
}

/// Get event by id, with its competition attached
pub async fn get_event(pool: &MySqlPool, id: i32) -> Result<Option<CompetitionEvent>> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get an event's results, best scratch ranking first
pub async fn get_event_results(pool: &MySqlPool, id: i32) -> Result<Vec<RunnerResult>> {
    events::event_results(pool, id).await
}
