//! Transaction resource calls.

use shared::{ListEnvelope, Transaction, TransactionForm, TransactionQuery};

use super::{paths, ApiClient};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<ListEnvelope<Transaction>, ApiError> {
        self.get_with_query(paths::transactions::ROOT, query).await
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        self.get(&paths::transactions::one(id)).await
    }

    pub async fn create_transaction(&self, form: &TransactionForm) -> Result<Transaction, ApiError> {
        self.post(paths::transactions::ROOT, form).await
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        form: &TransactionForm,
    ) -> Result<Transaction, ApiError> {
        self.patch(&paths::transactions::one(id), form).await
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&paths::transactions::one(id)).await
    }
}
