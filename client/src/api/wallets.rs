//! Wallet resource calls: CRUD plus the statement-payment action.

use shared::{ListEnvelope, PayStatementForm, Wallet, WalletForm};

use super::{paths, ApiClient};
use crate::error::ApiError;

impl ApiClient {
    /// The wallet list is small; the server returns a single page.
    pub async fn list_wallets(&self) -> Result<Vec<Wallet>, ApiError> {
        let list: ListEnvelope<Wallet> = self.get(paths::wallets::ROOT).await?;
        Ok(list.data)
    }

    pub async fn get_wallet(&self, id: &str) -> Result<Wallet, ApiError> {
        self.get(&paths::wallets::one(id)).await
    }

    pub async fn create_wallet(&self, form: &WalletForm) -> Result<Wallet, ApiError> {
        self.post(paths::wallets::ROOT, form).await
    }

    pub async fn update_wallet(&self, id: &str, form: &WalletForm) -> Result<Wallet, ApiError> {
        self.patch(&paths::wallets::one(id), form).await
    }

    pub async fn delete_wallet(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&paths::wallets::one(id)).await
    }

    /// Settle a credit-card statement, in full or via refinance.
    pub async fn pay_statement(
        &self,
        wallet_id: &str,
        form: &PayStatementForm,
    ) -> Result<(), ApiError> {
        self.post_unit(&paths::wallets::pay_statement(wallet_id), form)
            .await
    }
}
