use crate::modules::companies::core::company::Company;
use crate::modules::companies::use_cases::register_company::command::RegisterCompany;
use crate::shared::core::sanitize::sanitize_text;
use crate::shared::core::validation::ValidationError;

pub fn decide_register(command: RegisterCompany) -> Result<Company, ValidationError> {
    let company = Company {
        id: command.company_id,
        user_id: command.user_id,
        name: sanitize_text(&command.name),
        industry: sanitize_text(&command.industry),
        position: sanitize_text(&command.position),
        current_stage: command.current_stage,
        notes: sanitize_text(&command.notes),
        created_at: command.created_at,
        updated_at: command.created_at,
    };
    company.validate()?;
    Ok(company)
}
