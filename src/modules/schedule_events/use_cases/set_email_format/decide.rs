use crate::modules::schedule_events::core::schedule_event::{EventRuleError, ScheduleEvent};
use crate::modules::schedule_events::use_cases::set_email_format::command::SetEmailFormat;

/// Replaces the reply template. The text is stored as sent, unescaped.
pub fn decide_email_format(
    event: &ScheduleEvent,
    command: SetEmailFormat,
) -> Result<ScheduleEvent, EventRuleError> {
    if command.custom_email_format.chars().count() > 2000 {
        return Err(EventRuleError::EmailFormatTooLong);
    }
    Ok(ScheduleEvent {
        custom_email_format: command.custom_email_format,
        updated_at: command.set_at,
        ..event.clone()
    })
}
