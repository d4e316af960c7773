//! symcheck-catalogue
//!
//! The read-only reference data: symptoms, conditions, and the lookups the
//! matching engine and presentation layer need. Ships a built-in catalogue
//! and can load a replacement from a versioned JSON file.

pub mod builtin;
pub mod catalogue;
pub mod error;
pub mod file;

pub use catalogue::Catalogue;
pub use error::CatalogueError;
