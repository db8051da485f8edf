use crate::modules::companies::core::company::Company;
use crate::modules::companies::use_cases::revise_company::command::ReviseCompany;
use crate::shared::core::sanitize::sanitize_text;
use crate::shared::core::validation::ValidationError;

/// Applies the supplied fields only, then re-validates the whole record.
pub fn decide_revise(
    company: &Company,
    command: ReviseCompany,
) -> Result<Company, ValidationError> {
    let patch = command.patch;
    let mut revised = company.clone();
    if let Some(v) = patch.name {
        revised.name = sanitize_text(&v);
    }
    if let Some(v) = patch.industry {
        revised.industry = sanitize_text(&v);
    }
    if let Some(v) = patch.position {
        revised.position = sanitize_text(&v);
    }
    if let Some(v) = patch.current_stage {
        revised.current_stage = v;
    }
    if let Some(v) = patch.notes {
        revised.notes = sanitize_text(&v);
    }
    revised.updated_at = command.revised_at;
    revised.validate()?;
    Ok(revised)
}
