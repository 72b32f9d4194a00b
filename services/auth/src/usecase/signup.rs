use chrono::Utc;
use uuid::Uuid;

use bistro_domain::user::UserRole;
use bistro_domain::validate::{is_valid_email, is_valid_phone, normalize_email};

use crate::domain::password::hash_password;
use crate::domain::repository::UserRepository;
use crate::domain::types::{MIN_PASSWORD_LEN, User, UserProfile};
use crate::error::AuthServiceError;

pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

pub struct SignupUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> SignupUseCase<U> {
    pub async fn execute(&self, input: SignupInput) -> Result<UserProfile, AuthServiceError> {
        let username = input.username.trim();
        let email = normalize_email(&input.email);
        let phone = input.phone_number.trim();

        if username.is_empty() || email.is_empty() || phone.is_empty() || input.password.is_empty()
        {
            return Err(AuthServiceError::validation(
                "username, email, phone_number and password are required",
            ));
        }
        if !is_valid_email(&email) {
            return Err(AuthServiceError::validation("invalid email format"));
        }
        if !is_valid_phone(phone) {
            return Err(AuthServiceError::validation(
                "phone_number must be exactly 10 digits",
            ));
        }
        validate_password(&input.password)?;

        let user = User {
            id: Uuid::now_v7(),
            username: username.to_owned(),
            email,
            phone_number: phone.to_owned(),
            password_hash: hash_password(&input.password)?,
            role: UserRole::default(),
            is_active: true,
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id, "user signed up");
        Ok(UserProfile::from(&user))
    }
}

pub(crate) fn validate_password(password: &str) -> Result<(), AuthServiceError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthServiceError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
