//! Category state.

use std::sync::Arc;

use shared::{Category, CategoryForm, CategoryKind};

use crate::api::ApiClient;
use crate::cache::{CacheKey, Mutation, QueryCache};
use crate::error::ApiError;

pub struct CategoryStore {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl CategoryStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::CategoryList, || self.api.list_categories())
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Category, ApiError> {
        self.api.get_category(id).await
    }

    /// Categories of one direction (income or expense pickers).
    pub async fn list_of_kind(&self, kind: CategoryKind) -> Result<Vec<Category>, ApiError> {
        let mut categories = self.list().await?;
        categories.retain(|category| category.kind == kind);
        Ok(categories)
    }

    pub async fn create(&self, form: &CategoryForm) -> Result<Category, ApiError> {
        let category = self.api.create_category(form).await?;
        self.cache.apply(Mutation::CreateCategory);
        Ok(category)
    }

    pub async fn update(&self, id: &str, form: &CategoryForm) -> Result<Category, ApiError> {
        let category = self.api.update_category(id, form).await?;
        self.cache.apply(Mutation::UpdateCategory);
        Ok(category)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_category(id).await?;
        self.cache.apply(Mutation::DeleteCategory);
        Ok(())
    }
}
