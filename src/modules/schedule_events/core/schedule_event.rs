use crate::shared::core::time_slot::TimeSlot;
use crate::shared::core::validation::{ValidationError, check_length, check_uuid};
use crate::shared::infrastructure::record_store::OwnedRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_INTERVIEW_DURATION: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Candidate,
    Confirmed,
    Rejected,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventStatus::Candidate => "candidate",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Rejected => "rejected",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown event status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for EventStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate" => Ok(EventStatus::Candidate),
            "confirmed" => Ok(EventStatus::Confirmed),
            "rejected" => Ok(EventStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Interview,
    InfoSession,
    GroupDiscussion,
    FinalInterview,
}

/// A scheduling event (interview, info session, ...) owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub company_id: String,
    pub user_id: String,
    pub company_name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub status: EventStatus,
    pub candidate_slots: Vec<TimeSlot>,
    pub confirmed_slot: Option<TimeSlot>,
    pub interview_duration: i64,
    pub custom_email_format: String,
    pub location: String,
    pub is_online: bool,
    pub notes: String,
    pub is_archived: bool,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedRecord for ScheduleEvent {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventRuleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Validation failed: candidate_slots must not be empty")]
    NoCandidateSlots,

    #[error("Validation failed: candidate slot {index} must start before it ends")]
    NonChronologicalCandidate { index: usize },

    #[error("Validation failed: interview_duration must be positive")]
    NonPositiveDuration,

    #[error("status confirmed requires a confirmed slot; use the confirm endpoint")]
    ConfirmedWithoutSlot,

    #[error("status candidate cannot carry a confirmed slot")]
    CandidateWithConfirmedSlot,

    #[error("interview_duration does not match the confirmed slot")]
    DurationConflictsWithConfirmedSlot,

    #[error("confirmed slot start must be within one of the candidate slots")]
    ConfirmedSlotOutsideCandidates,

    #[error("Validation failed: custom_email_format must be at most 2000 characters")]
    EmailFormatTooLong,
}

impl ScheduleEvent {
    /// Field rules that hold for every stored event, whatever its status.
    pub fn validate(&self) -> Result<(), EventRuleError> {
        check_uuid("company_id", &self.company_id)?;
        check_length("company_name", &self.company_name, 1, 100)?;
        check_length("title", &self.title, 1, 200)?;
        check_length("location", &self.location, 0, 200)?;
        check_length("notes", &self.notes, 0, 1000)?;
        if self.custom_email_format.chars().count() > 2000 {
            return Err(EventRuleError::EmailFormatTooLong);
        }
        if self.interview_duration <= 0 {
            return Err(EventRuleError::NonPositiveDuration);
        }
        if self.candidate_slots.is_empty() {
            return Err(EventRuleError::NoCandidateSlots);
        }
        if let Some(index) = self
            .candidate_slots
            .iter()
            .position(|slot| !slot.is_chronological())
        {
            return Err(EventRuleError::NonChronologicalCandidate { index });
        }
        match (&self.status, &self.confirmed_slot) {
            (EventStatus::Confirmed, None) => Err(EventRuleError::ConfirmedWithoutSlot),
            (EventStatus::Candidate, Some(_)) => Err(EventRuleError::CandidateWithConfirmedSlot),
            (_, Some(slot)) if slot.duration_minutes() != self.interview_duration => {
                Err(EventRuleError::DurationConflictsWithConfirmedSlot)
            }
            (_, Some(slot))
                if !self
                    .candidate_slots
                    .iter()
                    .any(|candidate| candidate.admits_start(slot.start_time)) =>
            {
                Err(EventRuleError::ConfirmedSlotOutsideCandidates)
            }
            _ => Ok(()),
        }
    }
}
