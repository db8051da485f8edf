use crate::shared::core::validation::{ValidationError, check_length};
use crate::shared::infrastructure::record_store::OwnedRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    #[default]
    DocumentReview,
    FirstInterview,
    SecondInterview,
    FinalInterview,
    Offer,
    Rejected,
}

/// A company the user is applying to. Plain record, no temporal rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub industry: String,
    pub position: String,
    pub current_stage: SelectionStage,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedRecord for Company {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Company {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("name", &self.name, 1, 100)?;
        check_length("industry", &self.industry, 0, 50)?;
        check_length("position", &self.position, 0, 100)?;
        check_length("notes", &self.notes, 0, 1000)
    }
}
