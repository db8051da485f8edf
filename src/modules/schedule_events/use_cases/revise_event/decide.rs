// Pure decision function for a partial event update.
//
// Only supplied fields change and only those are sanitized, so text that was
// escaped on the way in is not escaped twice. Moving back to `candidate`
// drops the confirmed slot. The result must pass the entity rules.

use crate::modules::schedule_events::core::schedule_event::{
    EventRuleError, EventStatus, ScheduleEvent,
};
use crate::modules::schedule_events::use_cases::revise_event::command::ReviseEvent;
use crate::shared::core::sanitize::sanitize_text;

pub fn decide_revise(
    event: &ScheduleEvent,
    command: ReviseEvent,
) -> Result<ScheduleEvent, EventRuleError> {
    let patch = command.patch;
    let mut revised = event.clone();

    if let Some(v) = patch.company_id {
        revised.company_id = v.trim().to_string();
    }
    if let Some(v) = patch.company_name {
        revised.company_name = sanitize_text(&v);
    }
    if let Some(v) = patch.title {
        revised.title = sanitize_text(&v);
    }
    if let Some(v) = patch.location {
        revised.location = sanitize_text(&v);
    }
    if let Some(v) = patch.notes {
        revised.notes = sanitize_text(&v);
    }
    if let Some(v) = patch.kind {
        revised.kind = v;
    }
    if let Some(v) = patch.candidate_slots {
        revised.candidate_slots = v;
    }
    if let Some(v) = patch.interview_duration {
        revised.interview_duration = v;
    }
    if let Some(v) = patch.is_online {
        revised.is_online = v;
    }
    if let Some(status) = patch.status {
        revised.status = status;
        if status == EventStatus::Candidate {
            revised.confirmed_slot = None;
        }
    }
    if let Some(archived) = patch.is_archived {
        revised.archived_at = match (archived, event.archived_at) {
            (true, Some(since)) => Some(since),
            (true, None) => Some(command.revised_at),
            (false, _) => None,
        };
        revised.is_archived = archived;
    }

    revised.updated_at = command.revised_at;
    revised.validate()?;
    Ok(revised)
}
