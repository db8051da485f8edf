// Shared test fixture for schedule events. The canonical event is read from
// `json/schedule_event.json`, which doubles as a check of the wire shape.

use crate::modules::schedule_events::core::schedule_event::{
    EventKind, EventStatus, ScheduleEvent,
};
use crate::shared::core::time_slot::TimeSlot;
use chrono::{DateTime, TimeZone, Utc};

/// 2024-05-01 at `hour:minute` UTC, the day all fixture slots live on.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
}

pub struct ScheduleEventBuilder {
    inner: ScheduleEvent,
}

impl Default for ScheduleEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduleEventBuilder {
    pub fn new() -> Self {
        let inner: ScheduleEvent =
            serde_json::from_str(include_str!("json/schedule_event.json")).unwrap();
        Self { inner }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn company_id(mut self, v: impl Into<String>) -> Self {
        self.inner.company_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn kind(mut self, v: EventKind) -> Self {
        self.inner.kind = v;
        self
    }

    pub fn status(mut self, v: EventStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn candidate_slots(mut self, v: Vec<TimeSlot>) -> Self {
        self.inner.candidate_slots = v;
        self
    }

    pub fn confirmed_slot(mut self, v: Option<TimeSlot>) -> Self {
        self.inner.confirmed_slot = v;
        self
    }

    pub fn interview_duration(mut self, v: i64) -> Self {
        self.inner.interview_duration = v;
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> ScheduleEvent {
        self.inner
    }
}

#[cfg(test)]
mod schedule_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ScheduleEventBuilder::default().build();
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.kind, EventKind::Interview);
        assert_eq!(built.status, EventStatus::Candidate);
        assert_eq!(built.interview_duration, 60);
        assert_eq!(built.candidate_slots, vec![TimeSlot::new(at(10, 0), at(11, 0))]);
        assert_eq!(built.confirmed_slot, None);
    }

    #[rstest]
    fn setters_override_fields() {
        let built = ScheduleEventBuilder::new()
            .id("ev-2")
            .user_id("user-2")
            .status(EventStatus::Rejected)
            .interview_duration(30)
            .build();
        assert_eq!(built.id, "ev-2");
        assert_eq!(built.user_id, "user-2");
        assert_eq!(built.status, EventStatus::Rejected);
        assert_eq!(built.interview_duration, 30);
    }
}
