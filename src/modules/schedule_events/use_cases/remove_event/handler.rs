use crate::modules::schedule_events::core::schedule_event::ScheduleEvent;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct RemoveEventHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RemoveEventHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, event_id: &str, user_id: &str) -> Result<(), ApplicationError> {
        if !self.store.delete(event_id, user_id).await? {
            return Err(ApplicationError::NotFound);
        }
        tracing::info!(event_id, "event removed");
        Ok(())
    }
}
