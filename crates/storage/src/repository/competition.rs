use std::collections::HashMap;

use sqlx::MySqlPool;

use crate::error::Result;
use crate::models::{Competition, CompetitionEvent};
use crate::repository::event::EventRepository;

use super::placeholders;

const COMPETITION_COLUMNS: &str = "id, name, timekeeper";

pub struct CompetitionRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring search against the competition name.
    /// Each match comes back with its owned events loaded, and every owned
    /// event carries a copy of its parent so it can stand alone downstream.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Competition>> {
        let pattern = format!("%{}%", fragment.to_lowercase());
        let sql =
            format!("SELECT {COMPETITION_COLUMNS} FROM competitions WHERE LOWER(name) LIKE ?");
        let mut competitions = sqlx::query_as::<_, Competition>(&sql)
            .bind(&pattern)
            .fetch_all(self.pool)
            .await?;

        let ids: Vec<i32> = competitions.iter().map(|c| c.id).collect();
        let events = EventRepository::new(self.pool).for_competitions(&ids).await?;

        let mut by_competition: HashMap<i32, Vec<CompetitionEvent>> = HashMap::new();
        for event in events {
            by_competition.entry(event.competition_id).or_default().push(event);
        }
        for competition in &mut competitions {
            let mut owned = by_competition.remove(&competition.id).unwrap_or_default();
            let parent = Competition {
                events: Vec::new(),
                ..competition.clone()
            };
            for event in &mut owned {
                event.competition = Some(parent.clone());
            }
            competition.events = owned;
        }

        Ok(competitions)
    }

    /// Batched lookup used when attaching competitions to events.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Competition>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE id IN ({})",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, Competition>(&sql);
        for id in ids {
            query = query.bind(*id);
        }
        let competitions = query.fetch_all(self.pool).await?;

        Ok(competitions)
    }
}
