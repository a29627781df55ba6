//! Debt resource calls: CRUD plus the pay-installment action.

use serde::Serialize;
use shared::{Debt, DebtForm, ListEnvelope, PayInstallmentForm};

use super::{paths, ApiClient};
use crate::error::ApiError;

/// Page/limit pair accepted by paginated list endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ApiClient {
    pub async fn list_debts(&self, query: &PageQuery) -> Result<ListEnvelope<Debt>, ApiError> {
        self.get_with_query(paths::debts::ROOT, query).await
    }

    pub async fn get_debt(&self, id: &str) -> Result<Debt, ApiError> {
        self.get(&paths::debts::one(id)).await
    }

    pub async fn create_debt(&self, form: &DebtForm) -> Result<Debt, ApiError> {
        self.post(paths::debts::ROOT, form).await
    }

    pub async fn update_debt(&self, id: &str, form: &DebtForm) -> Result<Debt, ApiError> {
        self.patch(&paths::debts::one(id), form).await
    }

    pub async fn delete_debt(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&paths::debts::one(id)).await
    }

    /// Settle one installment from a wallet. The server applies all money
    /// math; the response carries no payload.
    pub async fn pay_installment(&self, form: &PayInstallmentForm) -> Result<(), ApiError> {
        self.post_unit(paths::debts::PAY_INSTALLMENT, form).await
    }
}
