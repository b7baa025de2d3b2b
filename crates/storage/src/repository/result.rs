use sqlx::MySqlPool;

use crate::error::Result;
use crate::models::RaceResult;

// Race times regularly exceed 24 hours, so the TIME column is read back as text.
const RESULT_COLUMNS: &str = "runner_id, event_id, status, CAST(time AS CHAR) AS time, \
     license, category, scratch_ranking, gender_ranking, category_ranking";

pub struct ResultRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All results achieved by one runner, unordered at this layer.
    pub async fn for_runner(&self, runner_id: i32) -> Result<Vec<RaceResult>> {
        let sql = format!("SELECT {RESULT_COLUMNS} FROM results WHERE runner_id = ?");
        let results = sqlx::query_as::<_, RaceResult>(&sql)
            .bind(runner_id)
            .fetch_all(self.pool)
            .await?;

        Ok(results)
    }

    /// All results of one event, best scratch ranking first. Rows without a
    /// scratch ranking sort ahead of ranked ones under MySQL's NULL ordering.
    pub async fn for_event(&self, event_id: i32) -> Result<Vec<RaceResult>> {
        let sql = format!(
            "SELECT {RESULT_COLUMNS} FROM results \
             WHERE event_id = ? ORDER BY scratch_ranking ASC"
        );
        let results = sqlx::query_as::<_, RaceResult>(&sql)
            .bind(event_id)
            .fetch_all(self.pool)
            .await?;

        Ok(results)
    }
}
