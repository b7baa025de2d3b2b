use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::{Competition, RunnerResult};

/// A single timed race within a competition.
#[derive(Debug, Clone, Default, FromRow)]
pub struct CompetitionEvent {
    pub id: i32,
    pub competition_id: i32,
    pub name: String,
    pub distance: u16,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Owning competition, `None` when the foreign key cannot be resolved.
    #[sqlx(skip)]
    pub competition: Option<Competition>,
    /// Filled by the aggregation engine for the event-results listing.
    #[sqlx(skip)]
    pub results: Vec<RunnerResult>,
}

impl CompetitionEvent {
    /// Keyed fields of the JSON representation: dates as `YYYY-MM-DD`,
    /// `competition` nested in full when resolved, `results` only when
    /// non-empty. The raw `competition_id` column is internal.
    pub(crate) fn to_map(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("id".into(), self.id.into());
        data.insert("name".into(), self.name.clone().into());
        data.insert("distance".into(), self.distance.into());
        data.insert("start_date".into(), self.start_date.to_string().into());
        if let Some(end_date) = self.end_date {
            data.insert("end_date".into(), end_date.to_string().into());
        }
        if let Some(competition) = &self.competition {
            data.insert("competition".into(), Value::Object(competition.to_map()));
        }
        if !self.results.is_empty() {
            let results = self
                .results
                .iter()
                .map(|r| Value::Object(r.to_map()))
                .collect();
            data.insert("results".into(), Value::Array(results));
        }
        data
    }
}

impl Serialize for CompetitionEvent {
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
    use crate::models::{RaceResult, Runner};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_serialize_without_competition_or_results() {
        let event = CompetitionEvent {
            id: 111,
            competition_id: 11,
            name: "event".to_string(),
            distance: 32,
            start_date: date("2024-06-07"),
            ..CompetitionEvent::default()
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"distance":32,"id":111,"name":"event","start_date":"2024-06-07"}"#
        );
    }

    #[test]
    fn test_serialize_with_everything() {
        let event = CompetitionEvent {
            id: 111,
            competition_id: 11,
            name: "event".to_string(),
            distance: 32,
            start_date: date("2024-06-07"),
            end_date: Some(date("2024-06-08")),
            competition: Some(Competition {
                id: 11,
                name: "compet".to_string(),
                timekeeper: "keeper".to_string(),
                events: Vec::new(),
            }),
            results: vec![
                RunnerResult {
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
                    runner: Some(Runner {
                        id: 12345,
                        first_name: "John".to_string(),
                        last_name: "Boe".to_string(),
                        gender: "M".to_string(),
                        ..Runner::default()
                    }),
                },
                RunnerResult {
                    result: RaceResult {
                        status: "abandoned".to_string(),
                        category: Some("M1F".to_string()),
                        ..RaceResult::default()
                    },
                    runner: Some(Runner {
                        id: 23456,
                        first_name: "Alice".to_string(),
                        last_name: "Bob".to_string(),
                        gender: "F".to_string(),
                        ..Runner::default()
                    }),
                },
            ],
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"competition":{"id":11,"name":"compet","timekeeper":"keeper"},"distance":32,"end_date":"2024-06-08","id":111,"name":"event","results":[{"category":"SEH","first_name":"John","gender":"M","last_name":"Boe","license":"license","ranking":{"category":5,"gender":13,"scratch":13},"runner_id":12345,"status":"finished","time":"32:54:19"},{"category":"M1F","first_name":"Alice","gender":"F","last_name":"Bob","runner_id":23456,"status":"abandoned"}],"start_date":"2024-06-07"}"#
        );
    }
}
