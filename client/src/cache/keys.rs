//! Cache keys and the mutation invalidation table.
//!
//! Every mutation kind declares, in one place, which families of cached
//! reads it dirties. Stores apply the declared set after a successful
//! mutation and never on failure, so a failed call leaves cached state
//! untouched.

use std::fmt;

/// Key of one cached read. List keys carry their page so different pages
/// of the same resource never shadow each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    DebtList { page: u32 },
    Debt(String),
    WalletList,
    TransactionList { page: u32 },
    CategoryList,
    BankList,
    MonthlyOverview,
    DebtStatus,
    SpendingWarning,
    UpcomingPayments,
    Profile,
}

impl CacheKey {
    /// The invalidation granularity: a mutation dirties whole key families,
    /// not individual pages.
    pub fn family(&self) -> KeyFamily {
        match self {
            CacheKey::DebtList { .. } => KeyFamily::DebtList,
            CacheKey::Debt(_) => KeyFamily::Debt,
            CacheKey::WalletList => KeyFamily::WalletList,
            CacheKey::TransactionList { .. } => KeyFamily::TransactionList,
            CacheKey::CategoryList => KeyFamily::CategoryList,
            CacheKey::BankList => KeyFamily::BankList,
            CacheKey::MonthlyOverview => KeyFamily::MonthlyOverview,
            CacheKey::DebtStatus => KeyFamily::DebtStatus,
            CacheKey::SpendingWarning => KeyFamily::SpendingWarning,
            CacheKey::UpcomingPayments => KeyFamily::UpcomingPayments,
            CacheKey::Profile => KeyFamily::Profile,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::DebtList { page } => write!(f, "debts?page={page}"),
            CacheKey::Debt(id) => write!(f, "debt:{id}"),
            CacheKey::WalletList => write!(f, "wallets"),
            CacheKey::TransactionList { page } => write!(f, "transactions?page={page}"),
            CacheKey::CategoryList => write!(f, "categories"),
            CacheKey::BankList => write!(f, "banks"),
            CacheKey::MonthlyOverview => write!(f, "analytics:monthly-overview"),
            CacheKey::DebtStatus => write!(f, "analytics:debt-status"),
            CacheKey::SpendingWarning => write!(f, "analytics:spending-warning"),
            CacheKey::UpcomingPayments => write!(f, "analytics:upcoming-payments"),
            CacheKey::Profile => write!(f, "profile"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    DebtList,
    Debt,
    WalletList,
    TransactionList,
    CategoryList,
    BankList,
    MonthlyOverview,
    DebtStatus,
    SpendingWarning,
    UpcomingPayments,
    Profile,
}

/// Every mutation the client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateDebt,
    UpdateDebt,
    DeleteDebt,
    PayInstallment,
    CreateWallet,
    UpdateWallet,
    DeleteWallet,
    PayStatement,
    CreateTransaction,
    UpdateTransaction,
    DeleteTransaction,
    CreateCategory,
    UpdateCategory,
    DeleteCategory,
    SyncBanks,
    UpdateProfile,
    SetMonthlyLimit,
    Login,
    Logout,
}

/// What a mutation dirties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Auth changes: nothing cached under the previous identity survives.
    Everything,
    Families(&'static [KeyFamily]),
}

impl Mutation {
    /// The declarative invalidation table.
    ///
    /// A payment or transaction moves money out of a wallet, so it dirties
    /// the wallet list and the spending analytics alongside its own
    /// resource; debt structure changes feed the debt-status and
    /// upcoming-payment aggregates.
    pub fn invalidates(&self) -> Invalidation {
        use KeyFamily::*;
        match self {
            Mutation::CreateDebt | Mutation::DeleteDebt => Invalidation::Families(&[
                DebtList,
                Debt,
                DebtStatus,
                UpcomingPayments,
            ]),
            Mutation::UpdateDebt => Invalidation::Families(&[
                DebtList,
                Debt,
                DebtStatus,
                UpcomingPayments,
            ]),
            Mutation::PayInstallment => Invalidation::Families(&[
                DebtList,
                Debt,
                DebtStatus,
                WalletList,
                SpendingWarning,
                UpcomingPayments,
                MonthlyOverview,
            ]),
            Mutation::CreateWallet | Mutation::DeleteWallet | Mutation::UpdateWallet => {
                Invalidation::Families(&[WalletList, UpcomingPayments])
            }
            Mutation::PayStatement => Invalidation::Families(&[
                WalletList,
                TransactionList,
                SpendingWarning,
                UpcomingPayments,
                MonthlyOverview,
            ]),
            Mutation::CreateTransaction
            | Mutation::UpdateTransaction
            | Mutation::DeleteTransaction => Invalidation::Families(&[
                TransactionList,
                WalletList,
                SpendingWarning,
                MonthlyOverview,
            ]),
            Mutation::CreateCategory | Mutation::UpdateCategory | Mutation::DeleteCategory => {
                Invalidation::Families(&[CategoryList])
            }
            Mutation::SyncBanks => Invalidation::Families(&[BankList]),
            Mutation::UpdateProfile => Invalidation::Families(&[Profile]),
            Mutation::SetMonthlyLimit => Invalidation::Families(&[Profile, SpendingWarning]),
            Mutation::Login | Mutation::Logout => Invalidation::Everything,
        }
    }
}
