use std::collections::HashMap;

use sqlx::MySqlPool;

use crate::error::Result;
use crate::models::{CompetitionEvent, CompetitionResult, RaceResult};
use crate::repository::distinct_ids;
use crate::repository::event::EventRepository;
use crate::repository::result::ResultRepository;

/// A runner's full history: one entry per result, walking events from the
/// most recent start date backwards. A runner without results yields an
/// empty list.
pub async fn runner_history(pool: &MySqlPool, runner_id: i32) -> Result<Vec<CompetitionResult>> {
    let results = ResultRepository::new(pool).for_runner(runner_id).await?;
    if results.is_empty() {
        return Ok(Vec::new());
    }

    let event_ids = distinct_ids(results.iter().map(|r| r.event_id));
    let events = EventRepository::new(pool).find_by_ids(&event_ids).await?;

    Ok(build_history(results, events))
}

/// Pairs each result with its event, walking `events` in their fetched
/// order and keeping the per-event result order. Results whose event id
/// matches none of the fetched events are dropped.
pub(crate) fn build_history(
    results: Vec<RaceResult>,
    events: Vec<CompetitionEvent>,
) -> Vec<CompetitionResult> {
    let mut by_event: HashMap<i32, Vec<RaceResult>> = HashMap::new();
    for result in results {
        by_event.entry(result.event_id).or_default().push(result);
    }

    let mut history = Vec::new();
    for event in events {
        if let Some(matched) = by_event.remove(&event.id) {
            for result in matched {
                history.push(CompetitionResult {
                    result,
                    event: event.clone(),
                });
            }
        }
    }

    history
}
