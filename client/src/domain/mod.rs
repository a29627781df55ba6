//! Pure view-model derivations over API responses.
//!
//! Nothing in here performs I/O or mutates money: the server is
//! authoritative for all financial math, these functions only rearrange
//! already-aggregated data for display.

pub mod debt_schedule;
pub mod net_worth;
pub mod spending_warning;
pub mod upcoming;

pub use debt_schedule::DebtScheduleView;
pub use net_worth::total_net_worth;
pub use spending_warning::SpendingWarningView;
pub use upcoming::{UpcomingPayment, UpcomingPaymentsView, UrgencyTier};
