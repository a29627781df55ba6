//! Transaction state.
//!
//! Only the plain paginated list is cached; filtered queries (date range,
//! wallet, category) go straight to the server since their key space is
//! unbounded.

use std::sync::Arc;

use log::info;
use shared::{ListEnvelope, Transaction, TransactionForm, TransactionQuery};

use crate::api::ApiClient;
use crate::cache::{CacheKey, Mutation, QueryCache};
use crate::error::ApiError;

pub struct TransactionStore {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl TransactionStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    /// One unfiltered page of transactions, newest first, cached per page.
    pub async fn list(&self, page: u32) -> Result<ListEnvelope<Transaction>, ApiError> {
        let query = TransactionQuery {
            page: Some(page),
            ..Default::default()
        };
        self.cache
            .get_or_fetch(CacheKey::TransactionList { page }, || {
                self.api.list_transactions(&query)
            })
            .await
    }

    /// A filtered query, uncached.
    pub async fn search(
        &self,
        query: &TransactionQuery,
    ) -> Result<ListEnvelope<Transaction>, ApiError> {
        self.api.list_transactions(query).await
    }

    pub async fn get(&self, id: &str) -> Result<Transaction, ApiError> {
        self.api.get_transaction(id).await
    }

    pub async fn create(&self, form: &TransactionForm) -> Result<Transaction, ApiError> {
        let transaction = self.api.create_transaction(form).await?;
        self.cache.apply(Mutation::CreateTransaction);
        info!("Created transaction {}", transaction.id);
        Ok(transaction)
    }

    pub async fn update(&self, id: &str, form: &TransactionForm) -> Result<Transaction, ApiError> {
        let transaction = self.api.update_transaction(id, form).await?;
        self.cache.apply(Mutation::UpdateTransaction);
        Ok(transaction)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_transaction(id).await?;
        self.cache.apply(Mutation::DeleteTransaction);
        info!("Deleted transaction {id}");
        Ok(())
    }
}
