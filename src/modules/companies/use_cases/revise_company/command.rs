use crate::modules::companies::core::company::SelectionStage;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub position: Option<String>,
    pub current_stage: Option<SelectionStage>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviseCompany {
    pub patch: CompanyPatch,
    pub revised_at: DateTime<Utc>,
}
