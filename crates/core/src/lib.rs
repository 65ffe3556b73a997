//! AntiScam Core - Domain types
//!
//! This crate contains the fundamental types shared across the dashboard:
//! - `TransactionRecord` / `ResultSet`: scored transactions as delivered by
//!   the external scoring service
//! - `SortKey` / `FieldValue`: the sortable-column model used by the sort
//!   engine and the presentation layer

pub mod field;
pub mod transaction;

pub use field::{FieldValue, SortKey};
pub use transaction::{synthesized_transaction_id, ResultSet, TransactionRecord};
