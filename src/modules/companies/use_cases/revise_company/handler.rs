use crate::modules::companies::core::company::Company;
use crate::modules::companies::use_cases::revise_company::command::ReviseCompany;
use crate::modules::companies::use_cases::revise_company::decide::decide_revise;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct ReviseCompanyHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReviseCompanyHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        company_id: &str,
        user_id: &str,
        command: ReviseCompany,
    ) -> Result<Company, ApplicationError> {
        let loaded = self
            .store
            .load(company_id, user_id)
            .await?
            .ok_or(ApplicationError::NotFound)?;
        let revised = decide_revise(&loaded.record, command)
            .map_err(|e| ApplicationError::Domain(e.to_string()))?;
        self.store.save(&revised, loaded.version).await?;
        Ok(revised)
    }
}
