use crate::modules::schedule_events::core::schedule_event::ScheduleEvent;
use crate::modules::schedule_events::use_cases::set_email_format::command::SetEmailFormat;
use crate::modules::schedule_events::use_cases::set_email_format::decide::decide_email_format;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct SetEmailFormatHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SetEmailFormatHandler<TStore>
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
        command: SetEmailFormat,
    ) -> Result<ScheduleEvent, ApplicationError> {
        let loaded = self
            .store
            .load(event_id, user_id)
            .await?
            .ok_or(ApplicationError::NotFound)?;
        let updated = decide_email_format(&loaded.record, command)
            .map_err(|e| ApplicationError::Domain(e.to_string()))?;
        self.store.save(&updated, loaded.version).await?;
        Ok(updated)
    }
}
