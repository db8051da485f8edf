use crate::modules::companies::core::company::Company;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct ListCompaniesHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListCompaniesHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Most recently updated first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<Company>, ApplicationError> {
        let mut companies = self.store.list_by_owner(user_id).await?;
        companies.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(companies)
    }

    pub async fn get(&self, company_id: &str, user_id: &str) -> Result<Company, ApplicationError> {
        self.store
            .load(company_id, user_id)
            .await?
            .map(|loaded| loaded.record)
            .ok_or(ApplicationError::NotFound)
    }
}
