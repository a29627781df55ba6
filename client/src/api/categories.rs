//! Category resource calls.

use shared::{Category, CategoryForm, ListEnvelope};

use super::{paths, ApiClient};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let list: ListEnvelope<Category> = self.get(paths::categories::ROOT).await?;
        Ok(list.data)
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, ApiError> {
        self.get(&paths::categories::one(id)).await
    }

    pub async fn create_category(&self, form: &CategoryForm) -> Result<Category, ApiError> {
        self.post(paths::categories::ROOT, form).await
    }

    pub async fn update_category(&self, id: &str, form: &CategoryForm) -> Result<Category, ApiError> {
        self.patch(&paths::categories::one(id), form).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&paths::categories::one(id)).await
    }
}
