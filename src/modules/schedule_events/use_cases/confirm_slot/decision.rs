use thiserror::Error;

/// Every way a slot confirmation can be refused. All but
/// `CandidateSlotsCorrupt` are the caller's fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfirmError {
    #[error("{0}")]
    MalformedInput(String),

    #[error("Invalid confirmed time range")]
    InvalidTimeRange,

    #[error("Confirmed slot duration does not match interview_duration")]
    DurationMismatch { expected: i64, actual: i64 },

    #[error("Failed to parse candidate slots")]
    CandidateSlotsCorrupt,

    #[error("Confirmed slot start must be within one of the candidate slots")]
    SlotNotInCandidates,
}

impl ConfirmError {
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, ConfirmError::CandidateSlotsCorrupt)
    }
}
