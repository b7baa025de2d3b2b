mod competition;
mod competition_result;
mod event;
mod result;
mod runner;
mod runner_result;

pub use competition::Competition;
pub use competition_result::CompetitionResult;
pub use event::CompetitionEvent;
pub use result::RaceResult;
pub use runner::Runner;
pub use runner_result::RunnerResult;
