use crate::modules::schedule_events::core::schedule_event::ScheduleEvent;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

/// Read side for events: the caller's list, newest first, and single lookups.
pub struct ListEventsHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListEventsHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<ScheduleEvent>, ApplicationError> {
        let mut events = self.store.list_by_owner(user_id).await?;
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    pub async fn get(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<ScheduleEvent, ApplicationError> {
        self.store
            .load(event_id, user_id)
            .await?
            .map(|loaded| loaded.record)
            .ok_or(ApplicationError::NotFound)
    }
}
