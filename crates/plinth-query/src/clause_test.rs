use super::*;
use crate::opts::{QueryOpts, SortDirection};

fn opts(page: u32, limit: u32, field: &str, dir: SortDirection) -> QueryOpts {
    QueryOpts {
        limit,
        page,
        sort_field: field.to_string(),
        sort_direction: dir,
        total_count: false,
    }
}

#[test]
fn test_paging_first_page() {
    assert_eq!(paging(&opts(1, 10, "", SortDirection::Asc)), "OFFSET 0 LIMIT 10");
    assert_eq!(paging(&opts(1, 5, "", SortDirection::Asc)), "OFFSET 0 LIMIT 5");
}

#[test]
fn test_paging_later_page() {
    assert_eq!(paging(&opts(4, 10, "", SortDirection::Asc)), "OFFSET 30 LIMIT 10");
}

#[test]
fn test_paging_page_zero_clamps_to_first_page() {
    assert_eq!(paging(&opts(0, 10, "", SortDirection::Asc)), "OFFSET 0 LIMIT 10");
}

#[test]
fn test_paging_zero_limit() {
    assert_eq!(paging(&opts(3, 0, "", SortDirection::Asc)), "OFFSET 0 LIMIT 0");
}

#[test]
fn test_paging_large_page_does_not_overflow() {
    let got = paging(&opts(u32::MAX, u32::MAX, "", SortDirection::Asc));
    assert!(got.starts_with("OFFSET "));
    assert!(got.ends_with(&format!("LIMIT {}", u32::MAX)));
}

#[test]
fn test_sorting_asc() {
    assert_eq!(
        sorting(&opts(0, 0, "test", SortDirection::Asc)),
        "ORDER BY test ASC"
    );
}

#[test]
fn test_sorting_desc() {
    assert_eq!(
        sorting(&opts(0, 0, "test-b", SortDirection::Desc)),
        "ORDER BY test-b DESC"
    );
}

#[test]
fn test_sorting_empty_field_does_not_panic() {
    assert_eq!(sorting(&opts(0, 0, "", SortDirection::Asc)), "ORDER BY  ASC");
}

#[test]
fn test_sorted_paging() {
    assert_eq!(
        sorted_paging(&opts(5, 10, "test", SortDirection::Asc)),
        "ORDER BY test ASC OFFSET 40 LIMIT 10"
    );
}

#[test]
fn test_sorted_paging_is_sorting_then_paging() {
    let o = opts(5, 4, "test-123", SortDirection::Asc);
    assert_eq!(sorted_paging(&o), format!("{} {}", sorting(&o), paging(&o)));
    assert_eq!(sorted_paging(&o), "ORDER BY test-123 ASC OFFSET 16 LIMIT 4");
}
