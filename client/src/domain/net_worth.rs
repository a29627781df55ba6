//! Net-worth aggregation across heterogeneous wallet types.
//!
//! Credit-card balances are *available credit*, not assets, so a credit
//! card contributes `balance - credit_limit` (its utilization, negated):
//! a card with balance 18M against a 20M limit carries 2M of debt and
//! contributes -2M. Every other wallet type contributes its balance as-is.
//! This is the one client-side computation with semantic weight; the sum
//! is not delegated to the server.

use shared::{Wallet, WalletType};

/// Signed contribution of one wallet to net worth.
pub fn wallet_contribution(wallet: &Wallet) -> f64 {
    match wallet.wallet_type {
        WalletType::CreditCard => wallet.balance - wallet.credit_limit.unwrap_or(0.0),
        _ => wallet.balance,
    }
}

/// Total net worth: the signed sum over all wallets.
pub fn total_net_worth(wallets: &[Wallet]) -> f64 {
    wallets.iter().map(wallet_contribution).sum()
}

/// Outstanding debt on a credit card (`credit_limit - balance`), `None`
/// for every other wallet type.
pub fn outstanding_card_debt(wallet: &Wallet) -> Option<f64> {
    match wallet.wallet_type {
        WalletType::CreditCard => Some(wallet.credit_limit.unwrap_or(0.0) - wallet.balance),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::WalletStatus;

    fn wallet(wallet_type: WalletType, balance: f64, credit_limit: Option<f64>) -> Wallet {
        Wallet {
            id: "w".to_string(),
            name: "Wallet".to_string(),
            wallet_type,
            balance,
            currency: "VND".to_string(),
            status: WalletStatus::Active,
            bank_name: None,
            masked_number: None,
            card_type: None,
            credit_limit,
            statement_date: None,
            payment_due_date: None,
            interest_rate: None,
            annual_fee: None,
            bank_id: None,
            logo: None,
            color: None,
        }
    }

    #[test]
    fn credit_card_contributes_negative_utilization() {
        let card = wallet(
            WalletType::CreditCard,
            18_000_000.0,
            Some(20_000_000.0),
        );
        assert_eq!(wallet_contribution(&card), -2_000_000.0);
        assert_eq!(outstanding_card_debt(&card), Some(2_000_000.0));
    }

    #[test]
    fn cash_contributes_balance_directly() {
        let cash = wallet(WalletType::Cash, 5_000_000.0, None);
        assert_eq!(wallet_contribution(&cash), 5_000_000.0);
        assert_eq!(outstanding_card_debt(&cash), None);
    }

    #[test]
    fn mixed_wallets_sum_with_sign_flip() {
        let wallets = vec![
            wallet(WalletType::Cash, 5_000_000.0, None),
            wallet(WalletType::Bank, 12_000_000.0, None),
            wallet(WalletType::CreditCard, 18_000_000.0, Some(20_000_000.0)),
            wallet(WalletType::PrepaidCard, 300_000.0, None),
        ];
        assert_eq!(total_net_worth(&wallets), 15_300_000.0);
    }

    #[test]
    fn credit_card_without_limit_defaults_to_zero() {
        // Missing creditLimit is treated as 0.
        let card = wallet(WalletType::CreditCard, 1_000_000.0, None);
        assert_eq!(wallet_contribution(&card), 1_000_000.0);
    }

    #[test]
    fn empty_wallet_list_sums_to_zero() {
        assert_eq!(total_net_worth(&[]), 0.0);
    }
}
