use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::CompetitionEvent;

#[derive(Debug, Clone, Default, FromRow)]
pub struct Competition {
    pub id: i32,
    pub name: String,
    pub timekeeper: String,
    /// Traversal aid for search: owned events are collected here but are
    /// never part of the competition's own JSON (events embed their
    /// competition, not the other way around).
    #[sqlx(skip)]
    pub events: Vec<CompetitionEvent>,
}

impl Competition {
    pub(crate) fn to_map(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("id".into(), self.id.into());
        data.insert("name".into(), self.name.clone().into());
        data.insert("timekeeper".into(), self.timekeeper.clone().into());
        data
    }
}

impl Serialize for Competition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
