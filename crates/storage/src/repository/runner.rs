use sqlx::MySqlPool;

use crate::error::Result;
use crate::models::Runner;

use super::placeholders;

const RUNNER_COLUMNS: &str = "id, first_name, last_name, gender, birth_year";

pub struct RunnerRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> RunnerRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring search against first or last name.
    /// An empty match list is a valid result, not an error.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Runner>> {
        let pattern = format!("%{}%", fragment.to_lowercase());
        let sql = format!(
            "SELECT {RUNNER_COLUMNS} FROM runners \
             WHERE LOWER(first_name) LIKE ? OR LOWER(last_name) LIKE ?"
        );
        let runners = sqlx::query_as::<_, Runner>(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(self.pool)
            .await?;

        Ok(runners)
    }

    /// Find runner by id. An absent id yields `None`, not an error.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Runner>> {
        let sql = format!("SELECT {RUNNER_COLUMNS} FROM runners WHERE id = ?");
        let runner = sqlx::query_as::<_, Runner>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(runner)
    }

    /// Batched lookup used when joining results back to their runners.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Runner>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {RUNNER_COLUMNS} FROM runners WHERE id IN ({})",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, Runner>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        let runners = query.fetch_all(self.pool).await?;

        Ok(runners)
    }
}
