use sqlx::MySqlPool;
use storage::{
    error::Result,
    models::{CompetitionResult, Runner},
    repository::runner::RunnerRepository,
    services::runners,
};

/// Search runners by name fragment
pub async fn search_runners(pool: &MySqlPool, fragment: &str) -> Result<Vec<Runner>> {
    let repo = RunnerRepository::new(pool);
    repo.search(fragment).await
}

/// Get runner by id
pub async fn get_runner(pool: &MySqlPool, id: i32) -> Result<Option<Runner>> {
    let repo = RunnerRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get a runner's result history, most recent event first
pub async fn get_runner_results(pool: &MySqlPool, id: i32) -> Result<Vec<CompetitionResult>> {
    runners::runner_history(pool, id).await
}
