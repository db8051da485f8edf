pub mod companies;
pub mod schedule_events;
pub mod state;
pub mod tokens;
