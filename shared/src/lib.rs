//! Wire and domain types shared across the pocketbook client.
//!
//! Everything here mirrors the JSON shapes of the finance API: camelCase
//! field names, `_id` primary keys, SCREAMING_SNAKE_CASE enum values.
//! These types carry no behaviour beyond (de)serialization; derivations
//! over them live in the client crate.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Status discriminant carried by every API envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Standard response envelope: `{ status, message, data }`.
///
/// `data` is optional so that error envelopes (which omit it) still decode;
/// the client rejects envelopes whose status is `error` before looking at
/// the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    #[serde(rename = "itemCount")]
    pub item_count: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    #[serde(rename = "hasPreviousPage")]
    pub has_previous_page: bool,
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
}

/// List payload: `{ data: [...], meta: {...} }` nested inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Error body returned on 4xx responses, possibly with per-field messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ---------------------------------------------------------------------------
// Auth & user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Authenticated user profile as returned by `/v1/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Monthly spending limit used by the spending-warning analytics.
    #[serde(default)]
    pub monthly_limit: Option<f64>,
}

/// Successful login/register payload: a bearer token plus the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// YYYY-MM-DD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordForm {
    pub old_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryForm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Wallets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletType {
    Cash,
    Bank,
    DebitCard,
    CreditCard,
    PrepaidCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletStatus {
    Active,
    Locked,
}

/// A wallet as returned by the API.
///
/// For `CreditCard` wallets `balance` is the *available* credit, so the
/// outstanding debt is `credit_limit - balance`. Every other type holds its
/// actual balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    pub balance: f64,
    pub currency: String,
    pub status: WalletStatus,

    // Card fields
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub masked_number: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,

    // Credit-card fields
    #[serde(default)]
    pub credit_limit: Option<f64>,
    /// Statement day of month (1-31).
    #[serde(default)]
    pub statement_date: Option<u32>,
    /// Payment due day of month.
    #[serde(default)]
    pub payment_due_date: Option<u32>,
    /// % per year.
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub annual_fee: Option<f64>,

    // Bank linkage
    #[serde(default)]
    pub bank_id: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<WalletType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WalletStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_debt: Option<f64>,
}

/// How a credit-card statement gets settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementAction {
    /// Pay the full outstanding balance.
    PayFull,
    /// Partial payment plus a refinance fee.
    Refinance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayStatementForm {
    pub action: StatementAction,
    pub source_wallet_id: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refinance_fee_rate: Option<f64>,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub wallet_id: String,
    pub category_id: String,
    /// Transfer target, only set for `Transfer` transactions.
    #[serde(default)]
    pub target_wallet_id: Option<String>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// ISO date string.
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
    // Joined fields the backend may include for display
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub wallet_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionForm {
    pub wallet_id: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_wallet_id: Option<String>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Query-string filters accepted by the transaction list endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Debts & installments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtType {
    /// Money I borrowed from someone.
    Loan,
    /// Money I lent to someone.
    Lend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtStatus {
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentStatus {
    Pending,
    Paid,
    Overdue,
}

/// One scheduled partial payment of a debt.
///
/// Installments are owned by their debt and arrive ordered by due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Parent debt; omitted when nested inside the debt itself.
    #[serde(default)]
    pub debt_id: Option<String>,
    /// ISO date string.
    pub due_date: String,
    pub amount: f64,
    pub status: InstallmentStatus,
    #[serde(default)]
    pub paid_at: Option<String>,
    /// Wallet the installment was paid from, once paid.
    #[serde(default)]
    pub wallet_id: Option<String>,
}

/// A debt towards (or from) a partner, optionally split into installments.
///
/// `remaining_amount` is server-maintained and never computed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    #[serde(rename = "_id")]
    pub id: String,
    pub partner_name: String,
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub total_amount: f64,
    pub remaining_amount: f64,
    pub status: DebtStatus,
    pub is_installment: bool,
    #[serde(default)]
    pub start_date: Option<String>,
    /// Due day of month, e.g. 10 for "the 10th".
    #[serde(default)]
    pub payment_date: Option<u32>,
    #[serde(default)]
    pub total_months: Option<u32>,
    #[serde(default)]
    pub monthly_payment: Option<f64>,
    #[serde(default)]
    pub paid_months: Option<u32>,
    #[serde(default)]
    pub installments: Option<Vec<Installment>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub debt_type: Option<DebtType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_installment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_months: Option<u32>,
    // monthly_payment is intentionally absent: the server computes it.
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInstallmentForm {
    pub installment_id: String,
    pub wallet_id: String,
}

// ---------------------------------------------------------------------------
// Banks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub short_name: String,
    pub logo: String,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// One row of the monthly-overview aggregation, keyed by flow direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyOverviewItem {
    #[serde(rename = "_id")]
    pub id: TransactionType,
    pub total: f64,
}

/// Monthly income/expense overview reduced from [`MonthlyOverviewItem`]
/// rows client-side; the server only ships the per-direction totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOverview {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// Aggregate of remaining debt per debt type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtStatusItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub total_remaining: f64,
    pub count: u32,
}

/// Discrete bucket summarizing how close spending is to the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    Safe,
    Warning,
    Overspent,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    pub name: String,
    pub amount: f64,
    pub percent: f64,
}

/// Spending-warning payload.
///
/// Older API deployments only fill `current_spending` and `monthly_limit`;
/// every other field is optional and derived client-side when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingWarningResponse {
    pub current_spending: f64,
    pub monthly_limit: f64,
    #[serde(default)]
    pub percent_used: Option<f64>,
    #[serde(default)]
    pub alert_level: Option<AlertLevel>,
    #[serde(default)]
    pub projected_spending: Option<f64>,
    /// Month-over-month change in %; positive means spending more.
    #[serde(default)]
    pub spending_trend: Option<f64>,
    #[serde(default)]
    pub daily_average: Option<f64>,
    #[serde(default)]
    pub safe_daily_spend: Option<f64>,
    #[serde(default)]
    pub top_category: Option<TopCategory>,
    #[serde(default)]
    pub advice_message: Option<String>,
}

/// Discriminant of an upcoming-payment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpcomingPaymentKind {
    CreditCard,
    Loan,
}

/// Position of an installment within its schedule, e.g. "3/12".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPosition {
    pub current: u32,
    pub total: u32,
    pub display: String,
}

/// One "thing to pay soon": either a credit-card statement or a loan
/// installment, as served by `/v1/analytics/upcoming-payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPaymentRow {
    #[serde(rename = "type")]
    pub kind: UpcomingPaymentKind,
    pub name: String,
    pub amount: f64,
    /// ISO date string.
    pub due_date: String,
    pub days_remaining: i64,
    #[serde(default)]
    pub wallet_id: Option<String>,
    #[serde(default)]
    pub debt_id: Option<String>,
    #[serde(default)]
    pub installment_id: Option<String>,
    #[serde(default)]
    pub installment: Option<InstallmentPosition>,
}
