pub mod events;
pub mod merge;
pub mod runners;
