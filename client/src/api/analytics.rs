//! Analytics reads.
//!
//! The monthly overview is the one endpoint whose rows get reduced
//! client-side (per-direction totals into a single overview); everything
//! else is returned as served.

use serde_json::Value;
use shared::{
    DebtStatusItem, MonthlyOverview, MonthlyOverviewItem, SpendingWarningResponse,
    TransactionType, UpcomingPaymentRow,
};

use super::{paths, ApiClient};
use crate::error::ApiError;

impl ApiClient {
    /// Income/expense totals for the current month.
    pub async fn monthly_overview(&self) -> Result<MonthlyOverview, ApiError> {
        let items: Vec<MonthlyOverviewItem> = self.get(paths::analytics::MONTHLY_OVERVIEW).await?;

        let total_for = |kind: TransactionType| {
            items
                .iter()
                .find(|item| item.id == kind)
                .map(|item| item.total)
                .unwrap_or(0.0)
        };
        let total_income = total_for(TransactionType::Income);
        let total_expense = total_for(TransactionType::Expense);

        Ok(MonthlyOverview {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        })
    }

    /// Remaining debt totals grouped by debt type.
    pub async fn debt_status(&self) -> Result<Vec<DebtStatusItem>, ApiError> {
        self.get(paths::analytics::DEBT_STATUS).await
    }

    /// Accrued credit-card fees; shape varies per deployment, kept raw.
    pub async fn credit_card_fees(&self) -> Result<Value, ApiError> {
        self.get(paths::analytics::CREDIT_CARD_FEES).await
    }

    pub async fn cards_summary(&self) -> Result<Value, ApiError> {
        self.get(paths::analytics::CARDS_SUMMARY).await
    }

    /// Per-category spending breakdown for one wallet.
    pub async fn wallet_overview(&self, wallet_id: &str) -> Result<Value, ApiError> {
        self.get(&paths::analytics::wallet_overview(wallet_id))
            .await
    }

    /// Month-by-month income/expense trend rows.
    pub async fn transactions_monthly(&self) -> Result<Value, ApiError> {
        self.get(paths::analytics::TRANSACTIONS_MONTHLY).await
    }

    /// Current spending against the monthly limit.
    pub async fn spending_warning(&self) -> Result<SpendingWarningResponse, ApiError> {
        self.get(paths::analytics::SPENDING_WARNING).await
    }

    /// Statement and installment due dates within the lookahead window.
    pub async fn upcoming_payments(&self) -> Result<Vec<UpcomingPaymentRow>, ApiError> {
        self.get(paths::analytics::UPCOMING_PAYMENTS).await
    }
}
