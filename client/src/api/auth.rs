//! Auth and user-profile calls.

use shared::{AuthSession, ChangePasswordForm, LoginForm, RegisterForm, UpdateProfileForm, User};

use super::{paths, ApiClient};
use crate::error::ApiError;

impl ApiClient {
    /// Exchange credentials for a bearer token and the user profile.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError> {
        self.post(paths::auth::LOGIN, form).await
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<AuthSession, ApiError> {
        self.post(paths::auth::REGISTER, form).await
    }

    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.get(paths::auth::PROFILE).await
    }

    pub async fn update_profile(&self, form: &UpdateProfileForm) -> Result<User, ApiError> {
        self.patch(paths::auth::PROFILE, form).await
    }

    pub async fn change_password(&self, form: &ChangePasswordForm) -> Result<(), ApiError> {
        self.post_unit(paths::auth::CHANGE_PASSWORD, form).await
    }
}
