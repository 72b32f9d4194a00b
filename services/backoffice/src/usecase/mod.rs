pub mod bill;
pub mod document;
pub mod order;
pub mod party;
pub mod product;
pub mod sale;
