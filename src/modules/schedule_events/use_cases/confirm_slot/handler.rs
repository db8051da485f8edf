use crate::modules::schedule_events::core::schedule_event::ScheduleEvent;
use crate::modules::schedule_events::use_cases::confirm_slot::command::ConfirmSlot;
use crate::modules::schedule_events::use_cases::confirm_slot::decide::decide_confirm;
use crate::modules::schedule_events::use_cases::confirm_slot::decision::ConfirmError;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::time_slot::TimeSlot;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

impl From<ConfirmError> for ApplicationError {
    fn from(error: ConfirmError) -> Self {
        if error.is_caller_error() {
            ApplicationError::Domain(error.to_string())
        } else {
            ApplicationError::Corrupt(error.to_string())
        }
    }
}

/// Names the part of an undecodable event document that broke. Unreadable
/// candidate slots get their own kind; anything else is reported as the event.
fn corruption_of(document: &Value) -> ApplicationError {
    let slots = document.get("candidate_slots").cloned().unwrap_or(Value::Null);
    if serde_json::from_value::<Vec<TimeSlot>>(slots).is_err() {
        ConfirmError::CandidateSlotsCorrupt.into()
    } else {
        ApplicationError::Corrupt("Failed to parse event".into())
    }
}

pub struct ConfirmSlotHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ConfirmSlotHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Loads the caller's event, validates the proposed slot against it and
    /// persists the result. Nothing is written unless every check passes.
    pub async fn handle(
        &self,
        event_id: &str,
        user_id: &str,
        command: ConfirmSlot,
    ) -> Result<ScheduleEvent, ApplicationError> {
        let loaded = match self.store.load(event_id, user_id).await {
            Ok(Some(loaded)) => loaded,
            Ok(None) => return Err(ApplicationError::NotFound),
            Err(RecordStoreError::Corrupt {
                id,
                reason,
                document,
            }) => {
                tracing::error!(event_id = %id, %reason, "stored event does not decode");
                return Err(corruption_of(&document));
            }
            Err(e) => return Err(e.into()),
        };

        let mut confirmed = decide_confirm(&loaded.record, command).map_err(|reason| {
            tracing::info!(event_id, %reason, "slot confirmation rejected");
            ApplicationError::from(reason)
        })?;
        confirmed.updated_at = Utc::now();

        self.store.save(&confirmed, loaded.version).await?;
        tracing::info!(event_id, status = %confirmed.status, "slot confirmed");
        Ok(confirmed)
    }
}
