use crate::modules::schedule_events::core::schedule_event::{EventKind, EventStatus};
use crate::shared::core::time_slot::TimeSlot;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Partial update of an event. Absent fields are left as they are.
/// The confirmed slot is not part of it; that goes through confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventPatch {
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<EventKind>,
    pub status: Option<EventStatus>,
    pub candidate_slots: Option<Vec<TimeSlot>>,
    pub interview_duration: Option<i64>,
    pub location: Option<String>,
    pub is_online: Option<bool>,
    pub notes: Option<String>,
    pub is_archived: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviseEvent {
    pub patch: EventPatch,
    pub revised_at: DateTime<Utc>,
}
