use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use bistro_auth::domain::password::hash_password;
use bistro_auth::domain::repository::{SmsPort, UserRepository};
use bistro_auth::domain::types::User;
use bistro_auth::error::AuthServiceError;
use bistro_domain::user::UserRole;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared handle to the stored users for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, AuthServiceError> {
        let id = identifier.trim();
        let email = id.to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email || u.phone_number == id || u.username == id)
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.phone_number == phone)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        let taken = users.iter().any(|u| {
            u.username == user.username
                || u.email == user.email
                || u.phone_number == user.phone_number
        });
        if taken {
            return Err(AuthServiceError::UserAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AuthServiceError::UserNotFound)?;
        user.password_hash = password_hash.to_owned();
        Ok(())
    }
}

// ── RecordingSms ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingSms {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl SmsPort for RecordingSms {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<(), AuthServiceError> {
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_owned(), code.to_owned()));
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub const TEST_PHONE: &str = "9876543210";
pub const TEST_PASSWORD: &str = "paneer-tikka";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

pub fn test_user() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        username: "meena".to_owned(),
        email: "meena@bistro.in".to_owned(),
        phone_number: TEST_PHONE.to_owned(),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        role: UserRole::Manager,
        is_active: true,
        created_at: Utc::now(),
    }
}
