//! Bank directory calls (used when linking wallets to banks).

use shared::Bank;

use super::{paths, ApiClient};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_banks(&self) -> Result<Vec<Bank>, ApiError> {
        self.get(paths::banks::ROOT).await
    }

    /// Ask the server to refresh its bank directory.
    pub async fn sync_banks(&self) -> Result<(), ApiError> {
        self.post_unit(paths::banks::SYNC, &serde_json::json!({}))
            .await
    }
}
