//! Authentication and profile state.
//!
//! Single writer of the durable session: login and register persist the
//! bearer token, logout removes it. Any auth transition clears the whole
//! query cache so nothing read under the previous identity survives.

use std::sync::Arc;

use log::info;
use shared::{ChangePasswordForm, LoginForm, RegisterForm, UpdateProfileForm, User};

use crate::api::ApiClient;
use crate::cache::{CacheKey, Mutation, QueryCache};
use crate::error::ApiError;
use crate::store::token_store::{StoredSession, TokenStore};

pub struct AuthStore {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    tokens: Arc<dyn TokenStore>,
}

impl AuthStore {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { api, cache, tokens }
    }

    /// Log in, persist the session and reset all cached reads.
    pub async fn login(&self, form: &LoginForm) -> Result<User, ApiError> {
        let session = self.api.login(form).await?;
        self.tokens.save_session(&StoredSession {
            access_token: session.access_token,
            user: Some(session.user.clone()),
        })?;
        self.cache.apply(Mutation::Login);
        info!("Logged in as {}", session.user.email);
        Ok(session.user)
    }

    /// Register a new account; the server logs the account in directly.
    pub async fn register(&self, form: &RegisterForm) -> Result<User, ApiError> {
        let session = self.api.register(form).await?;
        self.tokens.save_session(&StoredSession {
            access_token: session.access_token,
            user: Some(session.user.clone()),
        })?;
        self.cache.apply(Mutation::Login);
        info!("Registered {}", session.user.email);
        Ok(session.user)
    }

    /// Drop the stored session and all cached reads. Purely local; the
    /// bearer token is stateless on the server side.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.tokens.clear_session()?;
        self.cache.apply(Mutation::Logout);
        info!("Logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.tokens.load_session(), Ok(Some(_)))
    }

    /// The authenticated user's profile, cached.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.cache
            .get_or_fetch(CacheKey::Profile, || self.api.profile())
            .await
    }

    pub async fn update_profile(&self, form: &UpdateProfileForm) -> Result<User, ApiError> {
        let user = self.api.update_profile(form).await?;
        self.cache.apply(profile_mutation(form));
        Ok(user)
    }

    /// Change the monthly spending limit. This is a profile update, but it
    /// also feeds the spending-warning analytics, so it dirties both.
    pub async fn set_monthly_limit(&self, monthly_limit: f64) -> Result<User, ApiError> {
        let form = UpdateProfileForm {
            monthly_limit: Some(monthly_limit),
            ..Default::default()
        };
        let user = self.api.update_profile(&form).await?;
        self.cache.apply(Mutation::SetMonthlyLimit);
        info!("Monthly limit set to {monthly_limit}");
        Ok(user)
    }

    pub async fn change_password(&self, form: &ChangePasswordForm) -> Result<(), ApiError> {
        self.api.change_password(form).await
    }
}

/// A profile update that touches the monthly limit also feeds the
/// spending-warning analytics, so it dirties more than the profile.
fn profile_mutation(form: &UpdateProfileForm) -> Mutation {
    if form.monthly_limit.is_some() {
        Mutation::SetMonthlyLimit
    } else {
        Mutation::UpdateProfile
    }
}
