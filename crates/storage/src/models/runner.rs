use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::RaceResult;

#[derive(Debug, Clone, Default, FromRow)]
pub struct Runner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birth_year: Option<u16>,
    /// Filled by the aggregation engine, never read from the row itself.
    #[sqlx(skip)]
    pub results: Vec<RaceResult>,
}

impl Runner {
    /// Keyed fields of the JSON representation. `birth_year` is only
    /// present when known, `results` only when non-empty.
    pub(crate) fn to_map(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("id".into(), self.id.into());
        data.insert("first_name".into(), self.first_name.clone().into());
        data.insert("last_name".into(), self.last_name.clone().into());
        data.insert("gender".into(), self.gender.clone().into());
        if let Some(year) = self.birth_year {
            data.insert("birth_year".into(), year.into());
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

impl Serialize for Runner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
