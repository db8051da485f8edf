use crate::modules::schedule_events::core::schedule_event::ScheduleEvent;
use crate::modules::schedule_events::use_cases::register_event::command::RegisterEvent;
use crate::modules::schedule_events::use_cases::register_event::decide::decide_register;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct RegisterEventHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterEventHandler<TStore>
where
    TStore: RecordStore<ScheduleEvent> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterEvent) -> Result<ScheduleEvent, ApplicationError> {
        let event =
            decide_register(command).map_err(|e| ApplicationError::Domain(e.to_string()))?;
        self.store.insert(&event).await?;
        tracing::info!(event_id = %event.id, "event registered");
        Ok(event)
    }
}

#[cfg(test)]
mod register_event_handler_tests {
    use super::*;
    use crate::modules::schedule_events::core::schedule_event::EventKind;
    use crate::shared::core::time_slot::TimeSlot;
    use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
    use crate::tests::fixtures::schedule_events::at;
    use rstest::{fixture, rstest};

    #[fixture]
    fn register_command() -> RegisterEvent {
        RegisterEvent {
            event_id: "ev-0001".into(),
            user_id: "user-fixed-0001".into(),
            company_id: "0190a5d2-7c3e-7a10-9d55-0b1f5f3a6e11".into(),
            company_name: "Acme".into(),
            title: "Info session".into(),
            kind: EventKind::InfoSession,
            candidate_slots: vec![TimeSlot::new(at(10, 0), at(11, 0))],
            interview_duration: 60,
            location: String::new(),
            is_online: true,
            notes: String::new(),
            created_at: at(8, 0),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_stores_the_event(register_command: RegisterEvent) {
        let store = Arc::new(InMemoryRecordStore::<ScheduleEvent>::new());
        let handler = RegisterEventHandler::new(store.clone());
        let event = handler.handle(register_command).await.expect("handle failed");
        let stored = store.load(&event.id, "user-fixed-0001").await.unwrap().unwrap();
        assert_eq!(stored.record, event);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_stores_nothing_when_rejected(register_command: RegisterEvent) {
        let store = Arc::new(InMemoryRecordStore::<ScheduleEvent>::new());
        let handler = RegisterEventHandler::new(store.clone());
        let command = RegisterEvent {
            interview_duration: 0,
            ..register_command
        };
        let result = handler.handle(command).await;
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
        assert!(store.list_by_owner("user-fixed-0001").await.unwrap().is_empty());
    }
}
