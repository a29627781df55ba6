//! Analytics state: cached dashboard reads plus their view models.
//!
//! Analytics never mutate anything themselves; their cache entries are
//! dropped by the money-moving mutations declared in the invalidation
//! table.

use std::sync::Arc;

use shared::{DebtStatusItem, MonthlyOverview, SpendingWarningResponse, UpcomingPaymentRow};

use crate::api::ApiClient;
use crate::cache::{CacheKey, QueryCache};
use crate::domain::{SpendingWarningView, UpcomingPaymentsView};
use crate::error::ApiError;

pub struct AnalyticsStore {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
}

impl AnalyticsStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn monthly_overview(&self) -> Result<MonthlyOverview, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::MonthlyOverview, || self.api.monthly_overview())
            .await
    }

    pub async fn debt_status(&self) -> Result<Vec<DebtStatusItem>, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::DebtStatus, || self.api.debt_status())
            .await
    }

    pub async fn spending_warning(&self) -> Result<SpendingWarningResponse, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::SpendingWarning, || self.api.spending_warning())
            .await
    }

    /// Spending warning as a fully-derived display model for today.
    pub async fn spending_warning_view(&self) -> Result<SpendingWarningView, ApiError> {
        Ok(SpendingWarningView::for_today(
            &self.spending_warning().await?,
        ))
    }

    pub async fn upcoming_payments(&self) -> Result<Vec<UpcomingPaymentRow>, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::UpcomingPayments, || self.api.upcoming_payments())
            .await
    }

    /// Upcoming payments sorted soonest-first with urgency tiers applied.
    pub async fn upcoming_payments_view(&self) -> Result<UpcomingPaymentsView, ApiError> {
        UpcomingPaymentsView::build(self.upcoming_payments().await?)
    }
}
