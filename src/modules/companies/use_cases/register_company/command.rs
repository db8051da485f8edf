use crate::modules::companies::core::company::SelectionStage;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCompany {
    pub company_id: String,
    pub user_id: String,
    pub name: String,
    pub industry: String,
    pub position: String,
    pub current_stage: SelectionStage,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}
