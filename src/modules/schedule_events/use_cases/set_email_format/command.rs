use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetEmailFormat {
    pub custom_email_format: String,
    pub set_at: DateTime<Utc>,
}
