pub mod events;
pub mod runners;
