use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::{CompetitionEvent, RaceResult};

/// A result paired with the event it was achieved in, as listed in a
/// runner's history. The event is always resolved by construction; the
/// history builder drops results whose event cannot be found.
#[derive(Debug, Clone, Default)]
pub struct CompetitionResult {
    pub result: RaceResult,
    pub event: CompetitionEvent,
}

impl CompetitionResult {
    /// Serializes flat: the event's fields join the result's at the same
    /// level, with `id` renamed `event_id` and `name` renamed `event_name`.
    /// The event's competition stays nested; its own result list is never
    /// re-emitted here.
    pub(crate) fn to_map(&self) -> Map<String, Value> {
        let mut data = self.result.to_map();
        for (key, value) in self.event.to_map() {
            match key.as_str() {
                "id" => {
                    data.insert("event_id".into(), value);
                }
                "name" => {
                    data.insert("event_name".into(), value);
                }
                "results" => {}
                _ => {
                    data.insert(key, value);
                }
            }
        }
        data
    }
}

impl Serialize for CompetitionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Competition, Runner, RunnerResult};

    #[test]
    fn test_serialize_minimal() {
        let entry = CompetitionResult {
            result: RaceResult {
                status: "abandoned".to_string(),
                category: Some("M1H".to_string()),
                ..RaceResult::default()
            },
            event: CompetitionEvent {
                id: 112,
                competition_id: 11,
                name: "trail".to_string(),
                distance: 18,
                start_date: "2024-03-02".parse().unwrap(),
                ..CompetitionEvent::default()
            },
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"category":"M1H","distance":18,"event_id":112,"event_name":"trail","start_date":"2024-03-02","status":"abandoned"}"#
        );
    }

    #[test]
    fn test_serialize_with_everything() {
        let entry = CompetitionResult {
            result: RaceResult {
                status: "finished".to_string(),
                time: Some("32:54:19".to_string()),
                license: Some("license".to_string()),
                category: Some("SEH".to_string()),
                scratch_ranking: Some(13),
                gender_ranking: Some(13),
                category_ranking: Some(5),
                ..RaceResult::default()
            },
            event: CompetitionEvent {
                id: 111,
                competition_id: 11,
                name: "event".to_string(),
                distance: 32,
                start_date: "2024-06-07".parse().unwrap(),
                end_date: Some("2024-06-08".parse().unwrap()),
                competition: Some(Competition {
                    id: 11,
                    name: "compet".to_string(),
                    timekeeper: "keeper".to_string(),
                    events: Vec::new(),
                }),
                results: Vec::new(),
            },
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"category":"SEH","competition":{"id":11,"name":"compet","timekeeper":"keeper"},"distance":32,"end_date":"2024-06-08","event_id":111,"event_name":"event","license":"license","ranking":{"category":5,"gender":13,"scratch":13},"start_date":"2024-06-07","status":"finished","time":"32:54:19"}"#
        );
    }

    #[test]
    fn test_serialize_never_reemits_event_results() {
        let entry = CompetitionResult {
            result: RaceResult {
                status: "finished".to_string(),
                ..RaceResult::default()
            },
            event: CompetitionEvent {
                id: 111,
                competition_id: 11,
                name: "event".to_string(),
                distance: 32,
                start_date: "2024-06-07".parse().unwrap(),
                results: vec![RunnerResult {
                    result: RaceResult {
                        status: "finished".to_string(),
                        ..RaceResult::default()
                    },
                    runner: Some(Runner {
                        id: 1,
                        first_name: "John".to_string(),
                        last_name: "Boe".to_string(),
                        gender: "M".to_string(),
                        ..Runner::default()
                    }),
                }],
                ..CompetitionEvent::default()
            },
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"distance":32,"event_id":111,"event_name":"event","start_date":"2024-06-07","status":"finished"}"#
        );
    }
}
