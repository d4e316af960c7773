//! symcheck-core
//!
//! Pure domain types shared by the catalogue, the matching engine and the
//! presentation layer. No I/O.

pub mod error;
pub mod models;
