use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 0001-01-01T00:00:00Z, the instant clients send for an unset timestamp.
const UNSET_INSTANT_SECONDS: i64 = -62_135_596_800;

pub fn is_unset(instant: &DateTime<Utc>) -> bool {
    instant.timestamp() == UNSET_INSTANT_SECONDS && instant.timestamp_subsec_nanos() == 0
}

/// A closed interval between two instants, serialized as
/// `{"start_time": ..., "end_time": ...}` with RFC 3339 timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Builds a slot from optional bounds. Returns `None` when a bound is
    /// missing or unset, or when start is not strictly before end.
    pub fn from_bounds(
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        let (start_time, end_time) = (start_time?, end_time?);
        let slot = Self::new(start_time, end_time);
        slot.is_chronological().then_some(slot)
    }

    pub fn is_defined(&self) -> bool {
        !is_unset(&self.start_time) && !is_unset(&self.end_time)
    }

    /// Start strictly before end, both bounds set.
    pub fn is_chronological(&self) -> bool {
        self.is_defined() && self.start_time < self.end_time
    }

    /// Length in whole minutes, truncated.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Whether `instant` lies inside `[start_time, end_time]`, both ends
    /// inclusive. A slot whose start is after its end admits nothing.
    pub fn admits_start(&self, instant: DateTime<Utc>) -> bool {
        self.is_defined()
            && self.start_time <= self.end_time
            && self.start_time <= instant
            && instant <= self.end_time
    }
}
