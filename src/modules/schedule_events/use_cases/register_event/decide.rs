// Pure decision function for registering a new event.
//
// Free text is sanitized first, then the assembled event must pass the
// entity rules. New events always start as candidates without a confirmed slot.

use crate::modules::schedule_events::core::schedule_event::{
    EventRuleError, EventStatus, ScheduleEvent,
};
use crate::modules::schedule_events::use_cases::register_event::command::RegisterEvent;
use crate::shared::core::sanitize::sanitize_text;

pub fn decide_register(command: RegisterEvent) -> Result<ScheduleEvent, EventRuleError> {
    let event = ScheduleEvent {
        id: command.event_id,
        company_id: command.company_id.trim().to_string(),
        user_id: command.user_id,
        company_name: sanitize_text(&command.company_name),
        title: sanitize_text(&command.title),
        kind: command.kind,
        status: EventStatus::Candidate,
        candidate_slots: command.candidate_slots,
        confirmed_slot: None,
        interview_duration: command.interview_duration,
        custom_email_format: String::new(),
        location: sanitize_text(&command.location),
        is_online: command.is_online,
        notes: sanitize_text(&command.notes),
        is_archived: false,
        archived_at: None,
        created_at: command.created_at,
        updated_at: command.created_at,
    };
    event.validate()?;
    Ok(event)
}
