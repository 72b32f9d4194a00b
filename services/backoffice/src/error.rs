use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bistro_core::envelope::error_response;
use bistro_domain::billing::{BillingError, DocumentKind};
use bistro_domain::date_range::RangeError;

/// Back-office service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum BackofficeError {
    #[error("{0}")]
    Validation(String),
    #[error("party not found")]
    PartyNotFound,
    #[error("purchase not found")]
    PurchaseNotFound,
    #[error("estimate not found")]
    EstimateNotFound,
    #[error("sale not found")]
    SaleNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("document number already in use")]
    DocumentNumberTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl BackofficeError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::PartyNotFound => "PARTY_NOT_FOUND",
            Self::PurchaseNotFound => "PURCHASE_NOT_FOUND",
            Self::EstimateNotFound => "ESTIMATE_NOT_FOUND",
            Self::SaleNotFound => "SALE_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::DocumentNumberTaken => "DOCUMENT_NUMBER_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PartyNotFound
            | Self::PurchaseNotFound
            | Self::EstimateNotFound
            | Self::SaleNotFound
            | Self::OrderNotFound
            | Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::DocumentNumberTaken => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Not-found variant for a bill document of the given kind.
    pub fn document_not_found(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Purchase => Self::PurchaseNotFound,
            DocumentKind::Estimate => Self::EstimateNotFound,
            DocumentKind::Order => Self::OrderNotFound,
        }
    }
}

impl From<BillingError> for BackofficeError {
    fn from(err: BillingError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<RangeError> for BackofficeError {
    fn from(err: RangeError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for BackofficeError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}
