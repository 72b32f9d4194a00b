use serde::Serialize;

use bistro_auth_types::token::issue_access_token;

use crate::domain::password::verify_password;
use crate::domain::repository::UserRepository;
use crate::domain::types::UserProfile;
use crate::error::AuthServiceError;

pub struct LoginInput {
    /// Email, phone number or username.
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub token: String,
    /// Token expiry, seconds since epoch.
    pub expires_at: u64,
    pub user: UserProfile,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AuthServiceError> {
        if input.identifier.trim().is_empty() || input.password.is_empty() {
            return Err(AuthServiceError::validation(
                "identifier and password are required",
            ));
        }

        let user = self
            .users
            .find_by_identifier(&input.identifier)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }
        // Inactive is reported only after a correct password.
        if !user.is_active {
            return Err(AuthServiceError::UserInactive);
        }

        let (token, expires_at) = issue_access_token(
            user.id,
            &user.username,
            &user.email,
            user.role,
            &self.jwt_secret,
        )
        .map_err(|e| AuthServiceError::Internal(e.into()))?;

        Ok(LoginOutput {
            token,
            expires_at,
            user: UserProfile::from(&user),
        })
    }
}
