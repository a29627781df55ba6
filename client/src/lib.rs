//! Typed client for the pocketbook personal-finance API.
//!
//! Layering, bottom up:
//! - [`api`]: one call per REST endpoint, envelope unwrapping, error
//!   mapping. No state beyond the HTTP client and the bearer token.
//! - [`cache`]: read-through query cache with a declarative invalidation
//!   table keyed by mutation kind.
//! - [`domain`]: pure view-model derivations (installment schedules, net
//!   worth, spending warning, upcoming payments). No I/O, no money math
//!   that the server owns.
//! - [`store`]: the stateful layer applications use. Reads go through the
//!   cache, successful mutations invalidate what they dirty.
//!
//! [`Pocketbook`] wires the layers together:
//!
//! ```no_run
//! use pocketbook_client::Pocketbook;
//! use shared::LoginForm;
//!
//! # async fn run() -> Result<(), pocketbook_client::ApiError> {
//! let app = Pocketbook::new()?;
//! app.auth.login(&LoginForm {
//!     email: "me@example.com".to_string(),
//!     password: "secret".to_string(),
//! }).await?;
//! let net_worth = app.wallets.net_worth().await?;
//! println!("net worth: {net_worth}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;

use std::sync::Arc;

pub use api::ApiClient;
pub use cache::QueryCache;
pub use config::ApiConfig;
pub use error::ApiError;

use store::token_store::{FileTokenStore, TokenStore};
use store::{
    AnalyticsStore, AuthStore, CategoryStore, DebtStore, TransactionStore, WalletStore,
};

/// The assembled client: one store per resource, sharing a single API
/// client, query cache and token store.
pub struct Pocketbook {
    pub auth: AuthStore,
    pub wallets: WalletStore,
    pub transactions: TransactionStore,
    pub categories: CategoryStore,
    pub debts: DebtStore,
    pub analytics: AnalyticsStore,
    cache: Arc<QueryCache>,
}

impl Pocketbook {
    /// Environment-driven configuration and the file-backed token store.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ApiConfig::from_env(), Arc::new(FileTokenStore::new()?))
    }

    pub fn with_config(
        config: ApiConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, ApiError> {
        let api = Arc::new(ApiClient::with_config(config, Arc::clone(&tokens))?);
        let cache = Arc::new(QueryCache::new());

        Ok(Self {
            auth: AuthStore::new(Arc::clone(&api), Arc::clone(&cache), tokens),
            wallets: WalletStore::new(Arc::clone(&api), Arc::clone(&cache)),
            transactions: TransactionStore::new(Arc::clone(&api), Arc::clone(&cache)),
            categories: CategoryStore::new(Arc::clone(&api), Arc::clone(&cache)),
            debts: DebtStore::new(Arc::clone(&api), Arc::clone(&cache)),
            analytics: AnalyticsStore::new(Arc::clone(&api), Arc::clone(&cache)),
            cache,
        })
    }

    /// The shared query cache, exposed for manual refresh flows.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}
