//! Query options shared by repository implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction for [`QueryOpts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options to pass to a paged, sorted query.
///
/// Transactions are not carried here: queries that run inside a transaction
/// receive the transaction handle explicitly from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOpts {
    /// Page size
    pub limit: u32,

    /// Page number, 1-based
    pub page: u32,

    /// Column to sort by.
    ///
    /// Interpolated into SQL verbatim with no escaping — must come from a
    /// trusted allow-list, never from raw user input.
    pub sort_field: String,

    /// Sort direction
    #[serde(default)]
    pub sort_direction: SortDirection,

    /// Whether to also retrieve the total record count
    #[serde(default)]
    pub total_count: bool,
}

impl Default for QueryOpts {
    fn default() -> Self {
        QueryOpts {
            limit: 0,
            page: 1,
            sort_field: String::new(),
            sort_direction: SortDirection::Asc,
            total_count: false,
        }
    }
}

/// Common result metadata for a paged query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Total records found with the given parameters, when requested
    pub total_records: i64,
}

#[cfg(test)]
#[path = "opts_test.rs"]
mod tests;
