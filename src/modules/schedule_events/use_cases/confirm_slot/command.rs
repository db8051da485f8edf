// Command data type for confirming one of an event's offered slots.
//
// The bounds stay optional here: a missing instant is a validation failure
// of the decider, not of the transport.

use crate::modules::schedule_events::core::schedule_event::EventStatus;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmSlot {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// `None` means "confirmed".
    pub status: Option<EventStatus>,
}
