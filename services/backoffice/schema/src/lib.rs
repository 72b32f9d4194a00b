//! sea-orm entities owned by the back-office service.

pub mod documents;
pub mod orders;
pub mod parties;
pub mod products;
pub mod sales;
