use crate::modules::companies::core::company::Company;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

/// Deletes a company. Events that reference it are left in place.
pub struct RemoveCompanyHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RemoveCompanyHandler<TStore>
where
    TStore: RecordStore<Company> + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, company_id: &str, user_id: &str) -> Result<(), ApplicationError> {
        if !self.store.delete(company_id, user_id).await? {
            return Err(ApplicationError::NotFound);
        }
        tracing::info!(company_id, "company removed");
        Ok(())
    }
}
