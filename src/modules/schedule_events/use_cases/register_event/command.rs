use crate::modules::schedule_events::core::schedule_event::EventKind;
use crate::shared::core::time_slot::TimeSlot;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEvent {
    pub event_id: String,
    pub user_id: String,
    pub company_id: String,
    pub company_name: String,
    pub title: String,
    pub kind: EventKind,
    pub candidate_slots: Vec<TimeSlot>,
    pub interview_duration: i64,
    pub location: String,
    pub is_online: bool,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}
