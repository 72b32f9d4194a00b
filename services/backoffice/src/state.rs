use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use bistro_auth_types::identity::JwtSecret;

use crate::infra::db::{
    DbDocumentRepository, DbOrderRepository, DbPartyRepository, DbProductRepository,
    DbSaleRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}

impl AppState {
    pub fn party_repo(&self) -> DbPartyRepository {
        DbPartyRepository {
            db: self.db.clone(),
        }
    }

    pub fn document_repo(&self) -> DbDocumentRepository {
        DbDocumentRepository {
            db: self.db.clone(),
        }
    }

    pub fn sale_repo(&self) -> DbSaleRepository {
        DbSaleRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }
}
