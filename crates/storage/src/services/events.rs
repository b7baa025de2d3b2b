use std::collections::{HashMap, HashSet};

use sqlx::MySqlPool;

use crate::error::Result;
use crate::models::{Competition, CompetitionEvent, RaceResult, Runner, RunnerResult};
use crate::repository::competition::CompetitionRepository;
use crate::repository::distinct_ids;
use crate::repository::event::EventRepository;
use crate::repository::result::ResultRepository;
use crate::repository::runner::RunnerRepository;

use super::merge::merge_descending_by;

/// Free-text event search. Matches events by their own name and by the
/// name of their competition, merged into one list sorted by start date
/// descending, without duplicate event ids.
pub async fn search_events(pool: &MySqlPool, fragment: &str) -> Result<Vec<CompetitionEvent>> {
    let direct = EventRepository::new(pool).search(fragment).await?;
    let competitions = CompetitionRepository::new(pool).search(fragment).await?;

    Ok(merge_search_results(direct, competitions))
}

/// Flattens the events owned by competition matches, drops any whose id
/// already appears among the direct matches, sorts the remainder by start
/// date descending and merges them into the direct matches.
pub(crate) fn merge_search_results(
    direct: Vec<CompetitionEvent>,
    competitions: Vec<Competition>,
) -> Vec<CompetitionEvent> {
    let mut seen: HashSet<i32> = direct.iter().map(|event| event.id).collect();

    let mut additions = Vec::new();
    for competition in competitions {
        for event in competition.events {
            if seen.insert(event.id) {
                additions.push(event);
            }
        }
    }
    additions.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    merge_descending_by(direct, additions, |event| event.start_date)
}

/// All results of one event, best scratch ranking first, each paired with
/// its runner. Results whose runner cannot be resolved are kept so the
/// ranking order stays complete.
pub async fn event_results(pool: &MySqlPool, event_id: i32) -> Result<Vec<RunnerResult>> {
    let results = ResultRepository::new(pool).for_event(event_id).await?;
    if results.is_empty() {
        return Ok(Vec::new());
    }

    let runner_ids = distinct_ids(results.iter().map(|r| r.runner_id));
    let runners = RunnerRepository::new(pool).find_by_ids(&runner_ids).await?;

    Ok(build_event_results(results, runners))
}

/// Pairs each result with its runner, keeping the source result order.
/// One entry per result, whether or not the runner resolves.
pub(crate) fn build_event_results(
    results: Vec<RaceResult>,
    runners: Vec<Runner>,
) -> Vec<RunnerResult> {
    let by_id: HashMap<i32, Runner> = runners.into_iter().map(|r| (r.id, r)).collect();

    results
        .into_iter()
        .map(|result| {
            let runner = by_id.get(&result.runner_id).cloned();
            RunnerResult { result, runner }
        })
        .collect()
}
