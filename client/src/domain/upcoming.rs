//! Upcoming-payments view model.
//!
//! Turns the loosely-typed rows from `/v1/analytics/upcoming-payments`
//! into a tagged union: a credit-card statement carries a wallet id, a
//! loan installment carries debt and installment ids. A row missing the
//! ids its kind requires is rejected rather than rendered as something
//! half-payable.

use shared::{InstallmentPosition, UpcomingPaymentKind, UpcomingPaymentRow};

use crate::error::ApiError;

/// Urgency tier for a due date, ordered from calm to alarming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UrgencyTier {
    Safe,
    Warning,
    Serious,
    Critical,
}

impl UrgencyTier {
    /// Tier for a number of days until due. Overdue counts as critical.
    pub fn for_days_remaining(days: i64) -> Self {
        if days <= 2 {
            UrgencyTier::Critical
        } else if days <= 5 {
            UrgencyTier::Serious
        } else if days <= 10 {
            UrgencyTier::Warning
        } else {
            UrgencyTier::Safe
        }
    }
}

/// One upcoming payment, with the ids needed to act on it.
#[derive(Debug, Clone, PartialEq)]
pub enum UpcomingPayment {
    CreditCard {
        wallet_id: String,
        name: String,
        amount: f64,
        due_date: String,
        days_remaining: i64,
        urgency: UrgencyTier,
    },
    LoanInstallment {
        debt_id: String,
        installment_id: String,
        name: String,
        amount: f64,
        due_date: String,
        days_remaining: i64,
        urgency: UrgencyTier,
        position: Option<InstallmentPosition>,
    },
}

impl UpcomingPayment {
    pub fn amount(&self) -> f64 {
        match self {
            UpcomingPayment::CreditCard { amount, .. } => *amount,
            UpcomingPayment::LoanInstallment { amount, .. } => *amount,
        }
    }

    pub fn due_date(&self) -> &str {
        match self {
            UpcomingPayment::CreditCard { due_date, .. } => due_date,
            UpcomingPayment::LoanInstallment { due_date, .. } => due_date,
        }
    }

    pub fn urgency(&self) -> UrgencyTier {
        match self {
            UpcomingPayment::CreditCard { urgency, .. } => *urgency,
            UpcomingPayment::LoanInstallment { urgency, .. } => *urgency,
        }
    }

    fn from_row(row: UpcomingPaymentRow) -> Result<Self, ApiError> {
        let urgency = UrgencyTier::for_days_remaining(row.days_remaining);
        match row.kind {
            UpcomingPaymentKind::CreditCard => {
                let wallet_id = row.wallet_id.ok_or_else(|| {
                    ApiError::UnexpectedShape {
                        context: "upcoming payments".to_string(),
                        detail: format!("credit-card row '{}' has no walletId", row.name),
                    }
                })?;
                Ok(UpcomingPayment::CreditCard {
                    wallet_id,
                    name: row.name,
                    amount: row.amount,
                    due_date: row.due_date,
                    days_remaining: row.days_remaining,
                    urgency,
                })
            }
            UpcomingPaymentKind::Loan => {
                let debt_id = row.debt_id.ok_or_else(|| ApiError::UnexpectedShape {
                    context: "upcoming payments".to_string(),
                    detail: format!("loan row '{}' has no debtId", row.name),
                })?;
                let installment_id =
                    row.installment_id.ok_or_else(|| ApiError::UnexpectedShape {
                        context: "upcoming payments".to_string(),
                        detail: format!("loan row '{}' has no installmentId", row.name),
                    })?;
                Ok(UpcomingPayment::LoanInstallment {
                    debt_id,
                    installment_id,
                    name: row.name,
                    amount: row.amount,
                    due_date: row.due_date,
                    days_remaining: row.days_remaining,
                    urgency,
                    position: row.installment,
                })
            }
        }
    }
}

/// The upcoming-payments panel: rows sorted soonest-first plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingPaymentsView {
    pub items: Vec<UpcomingPayment>,
    pub total_due: f64,
    pub critical_count: usize,
}

impl UpcomingPaymentsView {
    pub fn build(rows: Vec<UpcomingPaymentRow>) -> Result<Self, ApiError> {
        let mut items = rows
            .into_iter()
            .map(UpcomingPayment::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        items.sort_by(|a, b| a.due_date().cmp(b.due_date()));

        let total_due = items.iter().map(UpcomingPayment::amount).sum();
        let critical_count = items
            .iter()
            .filter(|item| item.urgency() == UrgencyTier::Critical)
            .count();

        Ok(Self {
            items,
            total_due,
            critical_count,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_row(name: &str, due_date: &str, days: i64, amount: f64) -> UpcomingPaymentRow {
        UpcomingPaymentRow {
            kind: UpcomingPaymentKind::CreditCard,
            name: name.to_string(),
            amount,
            due_date: due_date.to_string(),
            days_remaining: days,
            wallet_id: Some(format!("w-{name}")),
            debt_id: None,
            installment_id: None,
            installment: None,
        }
    }

    fn loan_row(name: &str, due_date: &str, days: i64, amount: f64) -> UpcomingPaymentRow {
        UpcomingPaymentRow {
            kind: UpcomingPaymentKind::Loan,
            name: name.to_string(),
            amount,
            due_date: due_date.to_string(),
            days_remaining: days,
            wallet_id: None,
            debt_id: Some(format!("d-{name}")),
            installment_id: Some(format!("i-{name}")),
            installment: Some(InstallmentPosition {
                current: 3,
                total: 12,
                display: "3/12".to_string(),
            }),
        }
    }

    #[test]
    fn urgency_tiers() {
        assert_eq!(UrgencyTier::for_days_remaining(-1), UrgencyTier::Critical);
        assert_eq!(UrgencyTier::for_days_remaining(0), UrgencyTier::Critical);
        assert_eq!(UrgencyTier::for_days_remaining(2), UrgencyTier::Critical);
        assert_eq!(UrgencyTier::for_days_remaining(3), UrgencyTier::Serious);
        assert_eq!(UrgencyTier::for_days_remaining(5), UrgencyTier::Serious);
        assert_eq!(UrgencyTier::for_days_remaining(6), UrgencyTier::Warning);
        assert_eq!(UrgencyTier::for_days_remaining(10), UrgencyTier::Warning);
        assert_eq!(UrgencyTier::for_days_remaining(11), UrgencyTier::Safe);
        assert_eq!(UrgencyTier::for_days_remaining(60), UrgencyTier::Safe);
    }

    #[test]
    fn urgency_never_relaxes_as_the_due_date_approaches() {
        let mut previous = UrgencyTier::for_days_remaining(60);
        for days in (0..60).rev() {
            let tier = UrgencyTier::for_days_remaining(days);
            assert!(tier >= previous, "tier relaxed at {days} days");
            previous = tier;
        }
    }

    #[test]
    fn rows_sort_by_due_date_soonest_first() {
        let view = UpcomingPaymentsView::build(vec![
            card_row("visa", "2026-09-20", 22, 1_000_000.0),
            loan_row("car", "2026-09-02", 4, 2_500_000.0),
            card_row("master", "2026-09-10", 12, 500_000.0),
        ])
        .unwrap();

        let dates: Vec<&str> = view.items.iter().map(|i| i.due_date()).collect();
        assert_eq!(dates, vec!["2026-09-02", "2026-09-10", "2026-09-20"]);
        assert_eq!(view.total_due, 4_000_000.0);
    }

    #[test]
    fn critical_count_tallies_the_top_tier_only() {
        let view = UpcomingPaymentsView::build(vec![
            card_row("due-now", "2026-08-30", 1, 100.0),
            loan_row("overdue", "2026-08-25", -4, 100.0),
            card_row("later", "2026-09-15", 17, 100.0),
        ])
        .unwrap();
        assert_eq!(view.critical_count, 2);
    }

    #[test]
    fn loan_row_carries_its_ids_and_position() {
        let view = UpcomingPaymentsView::build(vec![loan_row("car", "2026-09-02", 4, 1.0)]).unwrap();
        match &view.items[0] {
            UpcomingPayment::LoanInstallment {
                debt_id,
                installment_id,
                position,
                urgency,
                ..
            } => {
                assert_eq!(debt_id, "d-car");
                assert_eq!(installment_id, "i-car");
                assert_eq!(position.as_ref().unwrap().display, "3/12");
                assert_eq!(*urgency, UrgencyTier::Serious);
            }
            other => panic!("expected a loan installment, got {other:?}"),
        }
    }

    #[test]
    fn loan_row_without_installment_id_is_rejected() {
        let mut row = loan_row("car", "2026-09-02", 4, 1.0);
        row.installment_id = None;
        let err = UpcomingPaymentsView::build(vec![row]).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape { .. }));
    }

    #[test]
    fn card_row_without_wallet_id_is_rejected() {
        let mut row = card_row("visa", "2026-09-20", 22, 1.0);
        row.wallet_id = None;
        let err = UpcomingPaymentsView::build(vec![row]).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape { .. }));
    }

    #[test]
    fn empty_rows_build_an_empty_view() {
        let view = UpcomingPaymentsView::build(vec![]).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.total_due, 0.0);
        assert_eq!(view.critical_count, 0);
    }
}
