use std::collections::HashMap;

use sqlx::MySqlPool;

use crate::error::Result;
use crate::models::{Competition, CompetitionEvent};
use crate::repository::competition::CompetitionRepository;

use super::placeholders;

const EVENT_COLUMNS: &str = "id, competition_id, name, distance, start_date, end_date";

pub struct EventRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring search against the event's own name,
    /// most recent start date first, each event carrying its competition.
    pub async fn search(&self, fragment: &str) -> Result<Vec<CompetitionEvent>> {
        let pattern = format!("%{}%", fragment.to_lowercase());
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM competition_events \
             WHERE LOWER(name) LIKE ? ORDER BY start_date DESC"
        );
        let events = sqlx::query_as::<_, CompetitionEvent>(&sql)
            .bind(&pattern)
            .fetch_all(self.pool)
            .await?;

        self.attach_competitions(events).await
    }

    /// Find event by id, with its competition attached when it resolves.
    /// A dangling competition reference leaves the field empty, not an error.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CompetitionEvent>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM competition_events WHERE id = ?");
        let event = sqlx::query_as::<_, CompetitionEvent>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match event {
            Some(event) => {
                let mut events = self.attach_competitions(vec![event]).await?;
                Ok(events.pop())
            }
            None => Ok(None),
        }
    }

    /// Batched lookup used when joining results back to their events,
    /// most recent start date first, each event carrying its competition.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<CompetitionEvent>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM competition_events \
             WHERE id IN ({}) ORDER BY start_date DESC",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, CompetitionEvent>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        let events = query.fetch_all(self.pool).await?;

        self.attach_competitions(events).await
    }

    /// All events owned by the given competitions, most recent start date
    /// first. Rows come back bare; the caller wires up the parents.
    pub(crate) async fn for_competitions(&self, ids: &[i32]) -> Result<Vec<CompetitionEvent>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM competition_events \
             WHERE competition_id IN ({}) ORDER BY start_date DESC",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, CompetitionEvent>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        let events = query.fetch_all(self.pool).await?;

        Ok(events)
    }

    /// Resolves the competitions referenced by `events` in one batched query
    /// and attaches each one it finds.
    async fn attach_competitions(
        &self,
        mut events: Vec<CompetitionEvent>,
    ) -> Result<Vec<CompetitionEvent>> {
        let ids = super::distinct_ids(events.iter().map(|e| e.competition_id));
        let competitions = CompetitionRepository::new(self.pool).find_by_ids(&ids).await?;
        let by_id: HashMap<i32, Competition> =
            competitions.into_iter().map(|c| (c.id, c)).collect();

        for event in &mut events {
            event.competition = by_id.get(&event.competition_id).cloned();
        }

        Ok(events)
    }
}
