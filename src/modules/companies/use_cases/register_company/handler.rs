use crate::modules::companies::core::company::Company;
use crate::modules::companies::use_cases::register_company::command::RegisterCompany;
use crate::modules::companies::use_cases::register_company::decide::decide_register;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct RegisterCompanyHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterCompanyHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterCompany) -> Result<Company, ApplicationError> {
        let company =
            decide_register(command).map_err(|e| ApplicationError::Domain(e.to_string()))?;
        self.store.insert(&company).await?;
        tracing::info!(company_id = %company.id, "company registered");
        Ok(company)
    }
}
