//! Wallet state: cached reads, CRUD, statement payment and net worth.
//!
//! The bank directory lives here too; banks only matter when linking a
//! wallet to one.

use std::sync::Arc;

use log::info;
use shared::{Bank, PayStatementForm, Wallet, WalletForm};

use crate::api::ApiClient;
use crate::cache::{CacheKey, Mutation, QueryCache};
use crate::domain::total_net_worth;
use crate::error::ApiError;

pub struct WalletStore {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl WalletStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn list(&self) -> Result<Vec<Wallet>, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::WalletList, || self.api.list_wallets())
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Wallet, ApiError> {
        self.api.get_wallet(id).await
    }

    /// Net worth across all wallets, credit cards counted as debt.
    pub async fn net_worth(&self) -> Result<f64, ApiError> {
        Ok(total_net_worth(&self.list().await?))
    }

    pub async fn create(&self, form: &WalletForm) -> Result<Wallet, ApiError> {
        let wallet = self.api.create_wallet(form).await?;
        self.cache.apply(Mutation::CreateWallet);
        info!("Created wallet {} ({})", wallet.id, wallet.name);
        Ok(wallet)
    }

    pub async fn update(&self, id: &str, form: &WalletForm) -> Result<Wallet, ApiError> {
        let wallet = self.api.update_wallet(id, form).await?;
        self.cache.apply(Mutation::UpdateWallet);
        Ok(wallet)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_wallet(id).await?;
        self.cache.apply(Mutation::DeleteWallet);
        info!("Deleted wallet {id}");
        Ok(())
    }

    /// Pay a credit-card statement from another wallet.
    ///
    /// A card cannot settle its own statement; that is rejected locally
    /// before any request goes out.
    pub async fn pay_statement(
        &self,
        wallet_id: &str,
        form: &PayStatementForm,
    ) -> Result<(), ApiError> {
        if form.source_wallet_id == wallet_id {
            return Err(ApiError::InvalidSourceWallet {
                wallet_id: wallet_id.to_string(),
            });
        }

        self.api.pay_statement(wallet_id, form).await?;
        self.cache.apply(Mutation::PayStatement);
        info!(
            "Paid statement of wallet {wallet_id} from {} ({:?})",
            form.source_wallet_id, form.action
        );
        Ok(())
    }

    pub async fn banks(&self) -> Result<Vec<Bank>, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::BankList, || self.api.list_banks())
            .await
    }

    /// Refresh the server-side bank directory, then drop the cached copy.
    pub async fn sync_banks(&self) -> Result<(), ApiError> {
        self.api.sync_banks().await?;
        self.cache.apply(Mutation::SyncBanks);
        Ok(())
    }
}
