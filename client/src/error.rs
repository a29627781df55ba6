//! Error taxonomy for the client.
//!
//! Every failure a caller can see is one of these variants; there is no
//! stringly-typed fallback. Mutation paths resolve to either success plus
//! cache invalidation or one of these errors with the cache left untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout). Retryable.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 5xx from the API server. Retryable.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// HTTP 401. Stored credentials have already been cleared when this
    /// surfaces; the caller must route the user back to login.
    #[error("authentication required")]
    Unauthorized,

    /// 4xx with per-field messages, surfaced inline on the originating form.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        errors: Vec<String>,
    },

    /// Business-rule rejection from the server (e.g. paying an already-paid
    /// installment), carrying the server message.
    #[error("rejected: {message}")]
    Rejected { message: String },

    /// Local pre-flight rejection: the installment is unknown or already
    /// paid, so the payment call is never issued.
    #[error("installment {installment_id} is not payable")]
    InvalidInstallment { installment_id: String },

    /// Local pre-flight rejection: a statement cannot be paid from the
    /// credit-card wallet it belongs to.
    #[error("wallet {wallet_id} cannot pay its own statement")]
    InvalidSourceWallet { wallet_id: String },

    /// The response body did not match the expected envelope or payload
    /// shape. Unexpected shapes fail loudly instead of defaulting.
    #[error("unexpected response shape ({context}): {detail}")]
    UnexpectedShape { context: String, detail: String },

    /// Token-store failure (filesystem, serialization).
    #[error("token storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Whether retrying the same request can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn shape(context: &str, detail: impl std::fmt::Display) -> Self {
        ApiError::UnexpectedShape {
            context: context.to_string(),
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        let server = ApiError::Server {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(server.is_retryable());

        let rejected = ApiError::Rejected {
            message: "already paid".to_string(),
        };
        assert!(!rejected.is_retryable());
        assert!(!ApiError::Unauthorized.is_retryable());
    }
}
