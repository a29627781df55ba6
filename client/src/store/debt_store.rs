//! Debt state: cached reads, CRUD and the installment-payment flow.

use std::sync::Arc;

use log::info;
use shared::{Debt, DebtForm, ListEnvelope, PayInstallmentForm};

use crate::api::{ApiClient, PageQuery};
use crate::cache::{CacheKey, Mutation, QueryCache};
use crate::domain::DebtScheduleView;
use crate::error::ApiError;

pub struct DebtStore {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl DebtStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    /// One page of debts, cached per page.
    pub async fn list(&self, page: u32) -> Result<ListEnvelope<Debt>, ApiError> {
        let query = PageQuery {
            page: Some(page),
            limit: None,
        };
        self.cache
            .get_or_fetch(CacheKey::DebtList { page }, || self.api.list_debts(&query))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Debt, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::Debt(id.to_string()), || self.api.get_debt(id))
            .await
    }

    /// The installment schedule view for one debt.
    pub async fn schedule(&self, id: &str) -> Result<DebtScheduleView, ApiError> {
        Ok(DebtScheduleView::from_debt(&self.get(id).await?))
    }

    pub async fn create(&self, form: &DebtForm) -> Result<Debt, ApiError> {
        let debt = self.api.create_debt(form).await?;
        self.cache.apply(Mutation::CreateDebt);
        info!("Created debt {} ({})", debt.id, debt.partner_name);
        Ok(debt)
    }

    pub async fn update(&self, id: &str, form: &DebtForm) -> Result<Debt, ApiError> {
        let debt = self.api.update_debt(id, form).await?;
        self.cache.apply(Mutation::UpdateDebt);
        Ok(debt)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_debt(id).await?;
        self.cache.apply(Mutation::DeleteDebt);
        info!("Deleted debt {id}");
        Ok(())
    }

    /// Pay one installment of a debt from a wallet.
    ///
    /// Pre-flights against the current schedule: the installment must be a
    /// known unpaid one, otherwise the call is never issued and the cache
    /// stays untouched. The server remains the authority; a race with
    /// another client still surfaces as [`ApiError::Rejected`].
    pub async fn pay_installment(
        &self,
        debt_id: &str,
        form: &PayInstallmentForm,
    ) -> Result<(), ApiError> {
        let schedule = self.schedule(debt_id).await?;
        if !schedule.is_payable(&form.installment_id) {
            return Err(ApiError::InvalidInstallment {
                installment_id: form.installment_id.clone(),
            });
        }

        self.api.pay_installment(form).await?;
        self.cache.apply(Mutation::PayInstallment);
        info!(
            "Paid installment {} of debt {debt_id} from wallet {}",
            form.installment_id, form.wallet_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DebtStatus, DebtType, Installment, InstallmentStatus};

    use crate::store::token_store::MemoryTokenStore;

    fn installment(id: &str, due_date: &str, status: InstallmentStatus) -> Installment {
        Installment {
            id: id.to_string(),
            debt_id: Some("d1".to_string()),
            due_date: due_date.to_string(),
            amount: 1_000_000.0,
            status,
            paid_at: None,
            wallet_id: None,
        }
    }

    fn debt() -> Debt {
        Debt {
            id: "d1".to_string(),
            partner_name: "Bank ABC".to_string(),
            debt_type: DebtType::Loan,
            total_amount: 2_000_000.0,
            remaining_amount: 1_000_000.0,
            status: DebtStatus::Ongoing,
            is_installment: true,
            start_date: None,
            payment_date: Some(10),
            total_months: Some(2),
            monthly_payment: None,
            paid_months: Some(1),
            installments: Some(vec![
                installment("i-paid", "2026-01-10", InstallmentStatus::Paid),
                installment("i-due", "2026-02-10", InstallmentStatus::Pending),
            ]),
        }
    }

    fn store(cache: Arc<QueryCache>) -> DebtStore {
        let tokens = Arc::new(MemoryTokenStore::new());
        let api = Arc::new(ApiClient::new(tokens).unwrap());
        DebtStore::new(api, cache)
    }

    async fn seed(cache: &QueryCache) {
        let _ = cache
            .get_or_fetch(CacheKey::Debt("d1".to_string()), || async { Ok(debt()) })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_installment_is_rejected_before_any_request() {
        let cache = Arc::new(QueryCache::new());
        seed(&cache).await;
        let store = store(Arc::clone(&cache));

        let form = PayInstallmentForm {
            installment_id: "i-unknown".to_string(),
            wallet_id: "w1".to_string(),
        };
        let err = store.pay_installment("d1", &form).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidInstallment { installment_id } if installment_id == "i-unknown"
        ));
        // Rejection leaves the cached debt in place.
        assert!(cache.contains(&CacheKey::Debt("d1".to_string())));
    }

    #[tokio::test]
    async fn already_paid_installment_is_rejected_locally() {
        let cache = Arc::new(QueryCache::new());
        seed(&cache).await;
        let store = store(Arc::clone(&cache));

        let form = PayInstallmentForm {
            installment_id: "i-paid".to_string(),
            wallet_id: "w1".to_string(),
        };
        let err = store.pay_installment("d1", &form).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInstallment { .. }));
        assert!(cache.contains(&CacheKey::Debt("d1".to_string())));
    }
}
