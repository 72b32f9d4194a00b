//! Bearer-token helpers for router tests.
//!
//! Back-office routes sit behind `BearerIdentity`. `MockAuth` signs a real
//! token with [`TEST_JWT_SECRET`](crate::TEST_JWT_SECRET) so the extractor
//! runs unmodified.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use uuid::Uuid;

use bistro_auth_types::token::issue_access_token;
use bistro_domain::user::UserRole;

use crate::TEST_JWT_SECRET;

/// Identity to sign into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl MockAuth {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            username: "test-cashier".to_owned(),
            role,
        }
    }

    /// A regular user with a random id.
    pub fn cashier() -> Self {
        Self::new(Uuid::new_v4(), UserRole::User)
    }

    /// Signed token for this identity.
    pub fn token(&self) -> String {
        let email = format!("{}@bistro.test", self.username);
        let (token, _exp) = issue_access_token(
            self.user_id,
            &self.username,
            &email,
            self.role,
            TEST_JWT_SECRET,
        )
        .expect("sign test token");
        token
    }

    /// `Authorization: Bearer <token>` value.
    pub fn authorization(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("Bearer {}", self.token()))
            .expect("token is a valid header value")
    }

    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, self.authorization());
        map
    }
}
