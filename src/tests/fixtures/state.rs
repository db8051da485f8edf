use crate::shared::infrastructure::identity::jwt::JwtIdentityResolver;
use crate::shell::state::{AppState, CompanyStore, ScheduleEventStore};
use crate::tests::fixtures::tokens::TEST_SECRET;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory(Arc::new(JwtIdentityResolver::new(TEST_SECRET, None)))
}

/// State whose stores fail every call.
pub fn make_offline_state() -> AppState {
    let mut schedule_events = ScheduleEventStore::new();
    schedule_events.toggle_offline();
    let mut companies = CompanyStore::new();
    companies.toggle_offline();
    AppState {
        identity: Arc::new(JwtIdentityResolver::new(TEST_SECRET, None)),
        schedule_events: Arc::new(schedule_events),
        companies: Arc::new(companies),
    }
}
