//! Pure query, pagination and merge logic shared by the storage and HTTP
//! layers. This crate has no internal dependencies and performs no I/O.

pub mod error;
pub mod filter;
pub mod merge;
pub mod pagination;
pub mod types;
