//! symcheck-matching
//!
//! The symptom-to-condition matching engine, plus the caller-owned state a
//! presentation layer threads through it. Everything here is pure: no I/O,
//! no globals, nothing that can fail.

pub mod scoring;
pub mod search;
pub mod selection;
pub mod state;

pub use scoring::{
    ConditionMatch, MAX_RESULTS, match_conditions, rank_conditions, score_conditions,
};
pub use selection::Selection;
pub use state::CheckerState;
