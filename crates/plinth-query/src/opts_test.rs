use super::*;

#[test]
fn test_default_opts() {
    let opts = QueryOpts::default();
    assert_eq!(opts.page, 1);
    assert_eq!(opts.limit, 0);
    assert_eq!(opts.sort_direction, SortDirection::Asc);
    assert!(!opts.total_count);
}

#[test]
fn test_sort_direction_display() {
    assert_eq!(SortDirection::Asc.to_string(), "ASC");
    assert_eq!(SortDirection::Desc.to_string(), "DESC");
}

#[test]
fn test_opts_from_json() {
    let opts: QueryOpts = serde_json::from_str(
        r#"{"limit": 25, "page": 3, "sort_field": "created_at", "sort_direction": "desc"}"#,
    )
    .unwrap();
    assert_eq!(opts.limit, 25);
    assert_eq!(opts.page, 3);
    assert_eq!(opts.sort_field, "created_at");
    assert_eq!(opts.sort_direction, SortDirection::Desc);
    // omitted fields fall back to defaults
    assert!(!opts.total_count);
}
