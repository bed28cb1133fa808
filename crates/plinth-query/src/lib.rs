//! plinth-query - pagination and sorting helpers for repository queries
//!
//! Provides [`QueryOpts`] for describing paged, sorted queries and the
//! clause builders [`paging`], [`sorting`], and [`sorted_paging`] that turn
//! them into SQL fragments.

pub mod clause;
pub mod opts;

pub use clause::{paging, sorted_paging, sorting};
pub use opts::{QueryOpts, QueryResult, SortDirection};
