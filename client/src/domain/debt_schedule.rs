//! Debt installment schedule view model.
//!
//! Derives everything the debt detail screen renders from a single `Debt`
//! payload: the paid/pending split, the next payable installment, the
//! progress ratio and completion. No balance arithmetic happens here; the
//! server maintains `remaining_amount` and the per-installment statuses.

use shared::{Debt, Installment, InstallmentStatus};

/// Display model for one debt's installment schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtScheduleView {
    /// Installments already settled, chronological.
    pub paid: Vec<Installment>,
    /// Installments still owed (pending or overdue), chronological.
    pub pending: Vec<Installment>,
    /// The current period: first installment by due date that is not PAID.
    pub next_payable: Option<Installment>,
    pub paid_months: u32,
    pub total_months: u32,
    /// `round(paid_months / total_months * 100)`, always within [0, 100].
    pub progress_percent: u32,
    /// Settled in full: nothing remaining and no unpaid installment.
    pub is_complete: bool,
}

impl DebtScheduleView {
    pub fn from_debt(debt: &Debt) -> Self {
        let mut installments = debt.installments.clone().unwrap_or_default();
        // The server sends installments ordered by due date; sorting again
        // keeps the chronological invariant even if it ever does not.
        installments.sort_by(|a, b| a.due_date.cmp(&b.due_date));

        let (paid, pending): (Vec<_>, Vec<_>) = installments
            .into_iter()
            .partition(|installment| installment.status == InstallmentStatus::Paid);

        let next_payable = pending.first().cloned();

        let paid_months = debt.paid_months.unwrap_or(paid.len() as u32);
        // A missing or zero month count still renders a sane ratio.
        let total_months = match debt.total_months {
            Some(months) if months > 0 => months,
            _ => 1,
        };
        let progress_percent = ((f64::from(paid_months) / f64::from(total_months)) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u32;

        let is_complete = debt.remaining_amount == 0.0 && pending.is_empty();

        Self {
            paid,
            pending,
            next_payable,
            paid_months,
            total_months,
            progress_percent,
            is_complete,
        }
    }

    /// Whether the schedule has any installments at all. A non-installment
    /// loan legitimately has none; that is an empty state, not an error.
    pub fn has_schedule(&self) -> bool {
        !self.paid.is_empty() || !self.pending.is_empty()
    }

    /// Pre-flight check for a payment: the id must belong to a known
    /// unpaid installment of this debt.
    pub fn is_payable(&self, installment_id: &str) -> bool {
        self.pending
            .iter()
            .any(|installment| installment.id == installment_id)
    }
}
