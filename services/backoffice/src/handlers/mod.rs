pub mod bill;
pub mod estimate;
pub mod order;
pub mod party;
pub mod product;
pub mod purchase;
pub mod query;
pub mod sale;

use uuid::Uuid;

use crate::error::BackofficeError;

/// Parse a `{id}` path segment.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, BackofficeError> {
    Uuid::parse_str(raw).map_err(|_| BackofficeError::validation(format!("invalid id {raw:?}")))
}
