use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::{RaceResult, Runner};

/// A result paired with the runner who achieved it, as listed under one
/// event. `runner` stays `None` when the referenced row no longer exists;
/// the result itself is still listed so the ranking order stays complete.
#[derive(Debug, Clone, Default)]
pub struct RunnerResult {
    pub result: RaceResult,
    pub runner: Option<Runner>,
}

impl RunnerResult {
    /// Serializes flat: the runner's fields join the result's at the same
    /// level, with the runner's `id` renamed `runner_id`. The runner's own
    /// result list is never re-emitted here.
    pub(crate) fn to_map(&self) -> Map<String, Value> {
        let mut data = self.result.to_map();
        if let Some(runner) = &self.runner {
            for (key, value) in runner.to_map() {
                match key.as_str() {
                    "id" => {
                        data.insert("runner_id".into(), value);
                    }
                    "results" => {}
                    _ => {
                        data.insert(key, value);
                    }
                }
            }
        }
        data
    }
}

impl Serialize for RunnerResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
