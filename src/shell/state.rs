use crate::modules::companies::core::company::Company;
use crate::modules::schedule_events::core::schedule_event::ScheduleEvent;
use crate::shared::infrastructure::identity::IdentityResolver;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

pub type ScheduleEventStore = InMemoryRecordStore<ScheduleEvent>;
pub type CompanyStore = InMemoryRecordStore<Company>;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityResolver>,
    pub schedule_events: Arc<ScheduleEventStore>,
    pub companies: Arc<CompanyStore>,
}

impl AppState {
    /// State backed by empty in-memory stores.
    pub fn in_memory(identity: Arc<dyn IdentityResolver>) -> Self {
        Self {
            identity,
            schedule_events: Arc::new(ScheduleEventStore::new()),
            companies: Arc::new(CompanyStore::new()),
        }
    }
}
