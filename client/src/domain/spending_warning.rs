//! Monthly spending-warning view model.
//!
//! Normalizes the spending-warning payload into a display model. Newer API
//! deployments ship the projections pre-computed; when they are absent the
//! same arithmetic is applied locally:
//!
//! ```text
//! days_remaining     = days_in_month - current_day
//! remaining_budget   = monthly_limit - current_spending
//! daily_average      = current_spending / current_day
//! projected_spending = daily_average * days_in_month
//! safe_daily_spend   = days_remaining > 0
//!                        ? max(0, remaining_budget / days_remaining) : 0
//! ```

use chrono::{Datelike, Local, NaiveDate};
use shared::{AlertLevel, SpendingWarningResponse, TopCategory};

/// Progress-ring status, mirroring the dashboard widget states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorStatus {
    /// Within budget, animated ring.
    Active,
    /// Plain ring: warning tier or no limit configured.
    Normal,
    /// Over budget.
    Exception,
}

/// Ring color per alert tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorColor {
    /// SAFE: teal-to-blue gradient.
    TealBlueGradient,
    /// WARNING: amber.
    Amber,
    /// OVERSPENT: red.
    Red,
    /// No limit configured.
    Grey,
}

/// Normalized display model for the spending warning.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingWarningView {
    pub current_spending: f64,
    pub monthly_limit: f64,
    /// False when no limit is configured (`monthly_limit <= 0`).
    pub has_limit: bool,
    /// Raw usage percentage; `None` when there is no limit (indeterminate,
    /// deliberately neither 0 nor 100).
    pub percent_used: Option<f64>,
    /// Progress-ring percentage, capped at 100.
    pub display_percent: Option<f64>,
    pub alert_level: Option<AlertLevel>,
    pub status: IndicatorStatus,
    pub color: IndicatorColor,
    pub remaining_budget: f64,
    pub days_remaining: u32,
    pub daily_average: f64,
    pub projected_spending: f64,
    pub safe_daily_spend: f64,
    /// Month-over-month change in %; positive means spending more.
    pub spending_trend: f64,
    /// A rising trend is the bad direction.
    pub trend_is_adverse: bool,
    pub top_category: Option<TopCategory>,
    pub advice_message: Option<String>,
}

impl SpendingWarningView {
    /// Derive the view for today's date.
    pub fn for_today(response: &SpendingWarningResponse) -> Self {
        let today = Local::now().date_naive();
        Self::derive(response, today.day(), days_in_month(&today))
    }

    /// Derive the view for an explicit day of an explicit month length.
    pub fn derive(
        response: &SpendingWarningResponse,
        current_day: u32,
        days_in_month: u32,
    ) -> Self {
        let current_spending = response.current_spending;
        let monthly_limit = response.monthly_limit;
        let has_limit = monthly_limit > 0.0;

        let days_remaining = days_in_month.saturating_sub(current_day);
        let remaining_budget = monthly_limit - current_spending;

        let percent_used = if has_limit {
            Some(
                response
                    .percent_used
                    .unwrap_or(current_spending / monthly_limit * 100.0),
            )
        } else {
            None
        };
        let display_percent = percent_used.map(|percent| percent.min(100.0));

        let daily_average = response.daily_average.unwrap_or_else(|| {
            if current_day > 0 {
                current_spending / f64::from(current_day)
            } else {
                0.0
            }
        });
        let projected_spending = response
            .projected_spending
            .unwrap_or(daily_average * f64::from(days_in_month));
        let safe_daily_spend = response.safe_daily_spend.unwrap_or_else(|| {
            if days_remaining > 0 {
                (remaining_budget / f64::from(days_remaining)).max(0.0)
            } else {
                0.0
            }
        });

        let alert_level = if has_limit {
            Some(
                response
                    .alert_level
                    .unwrap_or_else(|| classify(percent_used.unwrap_or(0.0))),
            )
        } else {
            None
        };
        let (status, color) = indicator(has_limit, alert_level);

        let spending_trend = response.spending_trend.unwrap_or(0.0);

        Self {
            current_spending,
            monthly_limit,
            has_limit,
            percent_used,
            display_percent,
            alert_level,
            status,
            color,
            remaining_budget,
            days_remaining,
            daily_average,
            projected_spending,
            safe_daily_spend,
            spending_trend,
            trend_is_adverse: spending_trend > 0.0,
            top_category: response.top_category.clone(),
            advice_message: response.advice_message.clone(),
        }
    }

    /// Projection already past the limit.
    pub fn projection_exceeds_limit(&self) -> bool {
        self.has_limit && self.projected_spending > self.monthly_limit
    }
}

/// Local fallback tiering when the server omits `alertLevel`.
fn classify(percent_used: f64) -> AlertLevel {
    if percent_used >= 100.0 {
        AlertLevel::Overspent
    } else if percent_used >= 80.0 {
        AlertLevel::Warning
    } else {
        AlertLevel::Safe
    }
}

/// Tier to status/color mapping, a pure function of the tier.
fn indicator(has_limit: bool, alert_level: Option<AlertLevel>) -> (IndicatorStatus, IndicatorColor) {
    if !has_limit {
        return (IndicatorStatus::Normal, IndicatorColor::Grey);
    }
    match alert_level {
        Some(AlertLevel::Warning) => (IndicatorStatus::Normal, IndicatorColor::Amber),
        Some(AlertLevel::Overspent) | Some(AlertLevel::Urgent) => {
            (IndicatorStatus::Exception, IndicatorColor::Red)
        }
        _ => (IndicatorStatus::Active, IndicatorColor::TealBlueGradient),
    }
}

fn days_in_month(date: &NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // First of next month always exists; the subtraction lands on the last
    // day of this month.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(current_spending: f64, monthly_limit: f64) -> SpendingWarningResponse {
        SpendingWarningResponse {
            current_spending,
            monthly_limit,
            percent_used: None,
            alert_level: None,
            projected_spending: None,
            spending_trend: None,
            daily_average: None,
            safe_daily_spend: None,
            top_category: None,
            advice_message: None,
        }
    }

    #[test]
    fn derives_projections_for_day_ten_of_thirty() {
        // 3M spent of a 10M limit on day 10 of a 30-day month.
        let view = SpendingWarningView::derive(&bare(3_000_000.0, 10_000_000.0), 10, 30);

        assert_eq!(view.daily_average, 300_000.0);
        assert_eq!(view.projected_spending, 9_000_000.0);
        assert_eq!(view.days_remaining, 20);
        assert_eq!(view.remaining_budget, 7_000_000.0);
        assert_eq!(view.safe_daily_spend, 350_000.0);
        assert_eq!(view.percent_used, Some(30.0));
    }

    #[test]
    fn server_supplied_fields_win_over_local_derivation() {
        let mut response = bare(3_000_000.0, 10_000_000.0);
        response.percent_used = Some(31.5);
        response.daily_average = Some(123_456.0);
        response.projected_spending = Some(8_888_888.0);
        response.safe_daily_spend = Some(200_000.0);
        response.alert_level = Some(AlertLevel::Warning);

        let view = SpendingWarningView::derive(&response, 10, 30);
        assert_eq!(view.percent_used, Some(31.5));
        assert_eq!(view.daily_average, 123_456.0);
        assert_eq!(view.projected_spending, 8_888_888.0);
        assert_eq!(view.safe_daily_spend, 200_000.0);
        assert_eq!(view.alert_level, Some(AlertLevel::Warning));
        assert_eq!(view.color, IndicatorColor::Amber);
        assert_eq!(view.status, IndicatorStatus::Normal);
    }

    #[test]
    fn no_limit_is_indeterminate_not_zero_or_hundred() {
        let view = SpendingWarningView::derive(&bare(2_000_000.0, 0.0), 15, 30);
        assert!(!view.has_limit);
        assert_eq!(view.percent_used, None);
        assert_eq!(view.display_percent, None);
        assert_eq!(view.alert_level, None);
        assert_eq!(view.color, IndicatorColor::Grey);
        assert_eq!(view.status, IndicatorStatus::Normal);
        assert_eq!(view.safe_daily_spend, 0.0);
    }

    #[test]
    fn display_percent_never_exceeds_hundred() {
        let mut response = bare(15_000_000.0, 10_000_000.0);
        response.percent_used = Some(150.0);
        let view = SpendingWarningView::derive(&response, 20, 30);
        assert_eq!(view.percent_used, Some(150.0));
        assert_eq!(view.display_percent, Some(100.0));
    }

    #[test]
    fn overspent_maps_to_red_exception() {
        let mut response = bare(12_000_000.0, 10_000_000.0);
        response.alert_level = Some(AlertLevel::Overspent);
        let view = SpendingWarningView::derive(&response, 20, 30);
        assert_eq!(view.status, IndicatorStatus::Exception);
        assert_eq!(view.color, IndicatorColor::Red);
        assert!(view.remaining_budget < 0.0);
    }

    #[test]
    fn safe_maps_to_gradient() {
        let mut response = bare(1_000_000.0, 10_000_000.0);
        response.alert_level = Some(AlertLevel::Safe);
        let view = SpendingWarningView::derive(&response, 5, 31);
        assert_eq!(view.status, IndicatorStatus::Active);
        assert_eq!(view.color, IndicatorColor::TealBlueGradient);
    }

    #[test]
    fn local_tiering_when_server_omits_alert_level() {
        let safe = SpendingWarningView::derive(&bare(3_000_000.0, 10_000_000.0), 10, 30);
        assert_eq!(safe.alert_level, Some(AlertLevel::Safe));

        let warning = SpendingWarningView::derive(&bare(8_500_000.0, 10_000_000.0), 10, 30);
        assert_eq!(warning.alert_level, Some(AlertLevel::Warning));

        let overspent = SpendingWarningView::derive(&bare(11_000_000.0, 10_000_000.0), 10, 30);
        assert_eq!(overspent.alert_level, Some(AlertLevel::Overspent));
        assert_eq!(overspent.color, IndicatorColor::Red);
    }

    #[test]
    fn last_day_of_month_has_zero_safe_spend() {
        let view = SpendingWarningView::derive(&bare(4_000_000.0, 10_000_000.0), 30, 30);
        assert_eq!(view.days_remaining, 0);
        assert_eq!(view.safe_daily_spend, 0.0);
        // Projection still extrapolates the full month.
        assert!((view.projected_spending - 4_000_000.0).abs() < 1.0);
    }

    #[test]
    fn negative_remaining_budget_clamps_safe_spend_to_zero() {
        let view = SpendingWarningView::derive(&bare(12_000_000.0, 10_000_000.0), 10, 30);
        assert_eq!(view.safe_daily_spend, 0.0);
    }

    #[test]
    fn positive_trend_is_adverse() {
        let mut response = bare(3_000_000.0, 10_000_000.0);
        response.spending_trend = Some(12.0);
        assert!(SpendingWarningView::derive(&response, 10, 30).trend_is_adverse);

        response.spending_trend = Some(-5.0);
        assert!(!SpendingWarningView::derive(&response, 10, 30).trend_is_adverse);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(
            days_in_month(&NaiveDate::from_ymd_opt(2026, 2, 5).unwrap()),
            28
        );
        assert_eq!(
            days_in_month(&NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()),
            29
        );
        assert_eq!(
            days_in_month(&NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
            31
        );
    }

    #[test]
    fn projection_exceeds_limit_flag() {
        let view = SpendingWarningView::derive(&bare(6_000_000.0, 10_000_000.0), 10, 30);
        // 600k/day over 30 days projects to 18M against a 10M limit.
        assert!(view.projection_exceeds_limit());
    }
}
