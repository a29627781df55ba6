//! Endpoint paths, versioned under `/v1` except the auth entry points.

pub const V1: &str = "/v1";

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const PROFILE: &str = "/v1/users/me";
    pub const CHANGE_PASSWORD: &str = "/v1/users/change-password";
}

pub mod categories {
    pub const ROOT: &str = "/v1/categories";

    pub fn one(id: &str) -> String {
        format!("{ROOT}/{id}")
    }
}

pub mod wallets {
    pub const ROOT: &str = "/v1/wallets";

    pub fn one(id: &str) -> String {
        format!("{ROOT}/{id}")
    }

    pub fn pay_statement(id: &str) -> String {
        format!("{ROOT}/{id}/pay-statement")
    }
}

pub mod transactions {
    pub const ROOT: &str = "/v1/transactions";

    pub fn one(id: &str) -> String {
        format!("{ROOT}/{id}")
    }
}

pub mod debts {
    pub const ROOT: &str = "/v1/debts";
    pub const PAY_INSTALLMENT: &str = "/v1/debts/pay-installment";

    pub fn one(id: &str) -> String {
        format!("{ROOT}/{id}")
    }
}

pub mod analytics {
    pub const MONTHLY_OVERVIEW: &str = "/v1/analytics/monthly-overview";
    pub const DEBT_STATUS: &str = "/v1/analytics/debt-status";
    pub const CREDIT_CARD_FEES: &str = "/v1/analytics/credit-card-fees";
    pub const TRANSACTIONS_MONTHLY: &str = "/v1/analytics/transactions-monthly";
    pub const SPENDING_WARNING: &str = "/v1/analytics/spending-warning";
    pub const UPCOMING_PAYMENTS: &str = "/v1/analytics/upcoming-payments";
    pub const CARDS_SUMMARY: &str = "/v1/transactions/stats/cards/summary";

    pub fn wallet_overview(id: &str) -> String {
        format!("/v1/transactions/stats/wallet/{id}/overview")
    }
}

pub mod banks {
    pub const ROOT: &str = "/v1/banks";
    pub const SYNC: &str = "/v1/banks/sync";
}
