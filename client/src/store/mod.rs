//! Stores: the stateful layer applications talk to.
//!
//! Each store pairs the API client with the shared query cache. Reads go
//! through the cache; mutations call the API and, only on success, apply
//! the mutation's declared invalidation set. The auth store additionally
//! owns the durable session.

pub mod analytics_store;
pub mod auth_store;
pub mod category_store;
pub mod debt_store;
pub mod token_store;
pub mod transaction_store;
pub mod wallet_store;

pub use analytics_store::AnalyticsStore;
pub use auth_store::AuthStore;
pub use category_store::CategoryStore;
pub use debt_store::DebtStore;
pub use token_store::{FileTokenStore, MemoryTokenStore, StoredSession, TokenStore};
pub use transaction_store::TransactionStore;
pub use wallet_store::WalletStore;
