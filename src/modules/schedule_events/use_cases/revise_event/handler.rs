use crate::modules::schedule_events::core::schedule_event::ScheduleEvent;
use crate::modules::schedule_events::use_cases::revise_event::command::ReviseEvent;
use crate::modules::schedule_events::use_cases::revise_event::decide::decide_revise;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct ReviseEventHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReviseEventHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        event_id: &str,
        user_id: &str,
        command: ReviseEvent,
    ) -> Result<ScheduleEvent, ApplicationError> {
        let loaded = self
            .store
            .load(event_id, user_id)
            .await?
            .ok_or(ApplicationError::NotFound)?;
        let revised = decide_revise(&loaded.record, command)
            .map_err(|e| ApplicationError::Domain(e.to_string()))?;
        self.store.save(&revised, loaded.version).await?;
        tracing::info!(event_id, status = %revised.status, "event revised");
        Ok(revised)
    }
}
