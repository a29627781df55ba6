//! HTTP layer: a thin typed client over the finance API.
//!
//! `ApiClient` owns the reqwest client, attaches the bearer token to every
//! request, unwraps the `{ status, message, data }` envelope and maps HTTP
//! failures onto the [`ApiError`] taxonomy. The per-resource call wrappers
//! live in the submodules and contain no logic beyond shape mapping.

pub mod analytics;
pub mod auth;
pub mod banks;
pub mod categories;
pub mod debts;
pub mod paths;
pub mod transactions;
pub mod wallets;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiEnvelope, ErrorBody, ResponseStatus};

pub use debts::PageQuery;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::store::token_store::TokenStore;

/// Typed client for the finance API.
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client using environment-driven configuration.
    pub fn new(tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        Self::with_config(ApiConfig::from_env(), tokens)
    }

    pub fn with_config(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ApiError::Network)?;
        info!("API client ready, base_url={}", config.base_url);
        Ok(Self {
            http,
            config,
            tokens,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build a request with the bearer token attached when one is stored.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.config.base_url);
        let mut request = self.http.request(method, url);
        match self.tokens.load_session() {
            Ok(Some(session)) => {
                request = request.bearer_auth(session.access_token);
            }
            Ok(None) => {}
            Err(e) => warn!("Could not read stored session: {e}"),
        }
        request
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("GET {path}");
        self.execute(self.request(Method::GET, path), path).await
    }

    pub(crate) async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("GET {path} (with query)");
        self.execute(self.request(Method::GET, path).query(query), path)
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {path}");
        self.execute(self.request(Method::POST, path).json(body), path)
            .await
    }

    /// POST for endpoints whose response payload carries no data.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {path}");
        self.execute_unit(self.request(Method::POST, path).json(body), path)
            .await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PATCH {path}");
        self.execute(self.request(Method::PATCH, path).json(body), path)
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!("DELETE {path}");
        self.execute_unit(self.request(Method::DELETE, path), path)
            .await
    }

    async fn execute<T>(&self, request: RequestBuilder, context: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let response = self.check_status(response, context).await?;
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::shape(context, e))?;
        unwrap_envelope(envelope, context)
    }

    async fn execute_unit(&self, request: RequestBuilder, context: &str) -> Result<(), ApiError> {
        let response = request.send().await?;
        let response = self.check_status(response, context).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        // Some endpoints return an envelope with no payload worth keeping;
        // the status discriminant still has to be honoured.
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| ApiError::shape(context, e))?;
        match envelope.status {
            ResponseStatus::Success => Ok(()),
            ResponseStatus::Error => Err(ApiError::Rejected {
                message: envelope.message,
            }),
        }
    }

    /// Map non-success HTTP statuses onto the error taxonomy.
    ///
    /// 401 clears the stored credentials before surfacing, so the next
    /// request starts from a logged-out state.
    async fn check_status(&self, response: Response, context: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("401 from {context}, clearing stored credentials");
            if let Err(e) = self.tokens.clear_session() {
                warn!("Failed to clear session after 401: {e}");
            }
            return Err(ApiError::Unauthorized);
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = if body.message.is_empty() {
            format!("HTTP {status}")
        } else {
            body.message
        };

        if status.is_server_error() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        match body.errors {
            Some(errors) if !errors.is_empty() => Err(ApiError::Validation { message, errors }),
            _ => Err(ApiError::Rejected { message }),
        }
    }
}

/// Reject error envelopes and missing payloads before handing data out.
fn unwrap_envelope<T>(envelope: ApiEnvelope<T>, context: &str) -> Result<T, ApiError> {
    match envelope.status {
        ResponseStatus::Error => Err(ApiError::Rejected {
            message: envelope.message,
        }),
        ResponseStatus::Success => envelope
            .data
            .ok_or_else(|| ApiError::shape(context, "success envelope without data")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_envelope_returns_payload() {
        let envelope = ApiEnvelope {
            status: ResponseStatus::Success,
            message: "ok".to_string(),
            data: Some(42u32),
        };
        assert_eq!(unwrap_envelope(envelope, "test").unwrap(), 42);
    }

    #[test]
    fn unwrap_envelope_rejects_error_status() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            status: ResponseStatus::Error,
            message: "installment already paid".to_string(),
            data: None,
        };
        match unwrap_envelope(envelope, "test") {
            Err(ApiError::Rejected { message }) => {
                assert_eq!(message, "installment already paid");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn unwrap_envelope_fails_loudly_on_missing_data() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            status: ResponseStatus::Success,
            message: String::new(),
            data: None,
        };
        assert!(matches!(
            unwrap_envelope(envelope, "test"),
            Err(ApiError::UnexpectedShape { .. })
        ));
    }
}
