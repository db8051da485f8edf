// Shared test fixture for companies, read from `json/company.json`.

use crate::modules::companies::core::company::{Company, SelectionStage};
use chrono::{DateTime, Utc};

pub struct CompanyBuilder {
    inner: Company,
}

impl Default for CompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CompanyBuilder {
    pub fn new() -> Self {
        let inner: Company = serde_json::from_str(include_str!("json/company.json")).unwrap();
        Self { inner }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn industry(mut self, v: impl Into<String>) -> Self {
        self.inner.industry = v.into();
        self
    }

    pub fn position(mut self, v: impl Into<String>) -> Self {
        self.inner.position = v.into();
        self
    }

    pub fn current_stage(mut self, v: SelectionStage) -> Self {
        self.inner.current_stage = v;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = v.into();
        self
    }

    pub fn updated_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> Company {
        self.inner
    }
}
