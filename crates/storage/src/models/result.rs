use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// One runner's outcome in one competition event.
///
/// Elapsed time is kept as text because race times routinely exceed 24
/// hours, which a clock-time type cannot represent. Absent optionals mean
/// "not applicable" (a DNF has no ranking), never zero.
#[derive(Debug, Clone, Default, FromRow)]
pub struct RaceResult {
    pub runner_id: i32,
    pub event_id: i32,
    pub status: String,
    pub time: Option<String>,
    pub license: Option<String>,
    pub category: Option<String>,
    pub scratch_ranking: Option<u16>,
    pub gender_ranking: Option<u16>,
    pub category_ranking: Option<u16>,
}

impl RaceResult {
    /// Keyed fields of the JSON representation. The two foreign keys are
    /// internal and never emitted; composites re-expose them under their
    /// own names.
    pub(crate) fn to_map(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("status".into(), self.status.clone().into());
        if let Some(time) = &self.time {
            data.insert("time".into(), time.clone().into());
        }
        if let Some(license) = &self.license {
            data.insert("license".into(), license.clone().into());
        }
        if let Some(category) = &self.category {
            data.insert("category".into(), category.clone().into());
        }
        if let Some(ranking) = self.ranking_map() {
            data.insert("ranking".into(), Value::Object(ranking));
        }
        data
    }

    /// The `ranking` sub-object grouping the scratch, gender and category
    /// rankings; `None` when all three are absent.
    fn ranking_map(&self) -> Option<Map<String, Value>> {
        if self.scratch_ranking.is_none()
            && self.gender_ranking.is_none()
            && self.category_ranking.is_none()
        {
            return None;
        }

        let mut ranking = Map::new();
        if let Some(rank) = self.scratch_ranking {
            ranking.insert("scratch".into(), rank.into());
        }
        if let Some(rank) = self.gender_ranking {
            ranking.insert("gender".into(), rank.into());
        }
        if let Some(rank) = self.category_ranking {
            ranking.insert("category".into(), rank.into());
        }
        Some(ranking)
    }
}

impl Serialize for RaceResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
