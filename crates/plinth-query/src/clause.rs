//! SQL fragment builders for pagination and sorting.
//!
//! Pure string formatting, no I/O and no validation: garbage options produce
//! syntactically odd but non-panicking output. `sort_field` is interpolated
//! verbatim, so it must come from a trusted allow-list.

use crate::opts::QueryOpts;

/// Build an `OFFSET {n} LIMIT {m}` fragment from page and limit.
///
/// Pages are 1-based; page 0 is treated as page 1 so the offset never
/// underflows.
pub fn paging(opts: &QueryOpts) -> String {
    let page = u64::from(opts.page.max(1));
    let limit = u64::from(opts.limit);
    format!("OFFSET {} LIMIT {}", (page - 1) * limit, limit)
}

/// Build an `ORDER BY {field} {direction}` fragment.
pub fn sorting(opts: &QueryOpts) -> String {
    format!("ORDER BY {} {}", opts.sort_field, opts.sort_direction)
}

/// Build a combined `ORDER BY ... OFFSET ... LIMIT ...` fragment.
pub fn sorted_paging(opts: &QueryOpts) -> String {
    format!("{} {}", sorting(opts), paging(opts))
}

#[cfg(test)]
#[path = "clause_test.rs"]
mod tests;
