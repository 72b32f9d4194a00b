use chrono::{DateTime, Utc};

use bistro_domain::validate::is_valid_phone;

use crate::domain::password::hash_password;
use crate::domain::repository::{KvStore, UserRepository};
use crate::error::AuthServiceError;
use crate::usecase::otp::consume_otp;
use crate::usecase::signup::validate_password;

pub struct ResetPasswordInput {
    pub phone_number: String,
    pub otp: String,
    pub new_password: String,
}

pub struct ResetPasswordUseCase<U: UserRepository, K: KvStore> {
    pub users: U,
    pub kv: K,
}

impl<U: UserRepository, K: KvStore> ResetPasswordUseCase<U, K> {
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), AuthServiceError> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        input: ResetPasswordInput,
        now: DateTime<Utc>,
    ) -> Result<(), AuthServiceError> {
        let phone = input.phone_number.trim();
        if !is_valid_phone(phone) {
            return Err(AuthServiceError::validation(
                "phone_number must be exactly 10 digits",
            ));
        }
        // Rejecting a weak password must not burn the code.
        validate_password(&input.new_password)?;

        consume_otp(&self.kv, phone, input.otp.trim(), now).await?;

        let user = self
            .users
            .find_by_phone(phone)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let hash = hash_password(&input.new_password)?;
        self.users.update_password(user.id, &hash).await?;

        tracing::info!(user_id = %user.id, "password reset");
        Ok(())
    }
}
