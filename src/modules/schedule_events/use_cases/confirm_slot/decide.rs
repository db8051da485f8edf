// Pure decision function for slot confirmation.
//
// Checks run in a fixed order and the first failure wins:
// time range, duration, then containment of the proposed start.
// Only the start must fall inside a candidate; the end may run past it.

use crate::modules::schedule_events::core::schedule_event::{EventStatus, ScheduleEvent};
use crate::modules::schedule_events::use_cases::confirm_slot::command::ConfirmSlot;
use crate::modules::schedule_events::use_cases::confirm_slot::decision::ConfirmError;
use crate::shared::core::time_slot::TimeSlot;

pub fn decide_confirm(
    event: &ScheduleEvent,
    command: ConfirmSlot,
) -> Result<ScheduleEvent, ConfirmError> {
    let proposed = TimeSlot::from_bounds(command.start_time, command.end_time)
        .ok_or(ConfirmError::InvalidTimeRange)?;

    let actual = proposed.duration_minutes();
    if actual != event.interview_duration {
        return Err(ConfirmError::DurationMismatch {
            expected: event.interview_duration,
            actual,
        });
    }

    let contained = event
        .candidate_slots
        .iter()
        .any(|candidate| candidate.admits_start(proposed.start_time));
    if !contained {
        return Err(ConfirmError::SlotNotInCandidates);
    }

    let status = command.status.unwrap_or(EventStatus::Confirmed);
    if status == EventStatus::Candidate {
        return Err(ConfirmError::MalformedInput(
            "status candidate cannot carry a confirmed slot".into(),
        ));
    }

    Ok(ScheduleEvent {
        status,
        confirmed_slot: Some(proposed),
        ..event.clone()
    })
}
