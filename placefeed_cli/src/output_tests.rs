use super::*;

fn load_posts_fixture() -> Vec<Post> {
    let json_str = include_str!("../../placefeed_api/tests/fixtures/posts.json");
    serde_json::from_str(json_str).unwrap()
}

#[test]
fn test_build_post_rows() {
    let posts = load_posts_fixture();
    let rows = build_post_rows(&posts);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].user_id, 1);
    assert!(rows[0].title.ends_with("..."));
    assert!(!rows[1].body.contains('\n'));
}

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate("qui est esse", 48), "qui est esse");
}

#[test]
fn test_truncate_flattens_newlines() {
    assert_eq!(truncate("a\nb", 48), "a b");
}

#[test]
fn test_truncate_long_text_gets_ellipsis() {
    let long = "x".repeat(100);
    let out = truncate(&long, 10);
    assert_eq!(out, format!("{}...", "x".repeat(10)));
}

#[test]
fn test_format_login_time() {
    assert_eq!(format_login_time(0), "1970-01-01 00:00:00 UTC");
}

#[test]
fn test_build_user_row() {
    let user = UserInfo {
        id: 42,
        nickname: "alice".to_string(),
        login_time: 0,
    };
    let row = build_user_row(&user);
    assert_eq!(row.id, 42);
    assert_eq!(row.nickname, "alice");
    assert!(row.login_time.starts_with("1970-01-01"));
}

#[test]
fn test_posts_table_renders_headers() {
    let posts = load_posts_fixture();
    let table = Table::new(build_post_rows(&posts)).to_string();
    assert!(table.contains("ID"));
    assert!(table.contains("Title"));
    assert!(table.contains("qui est esse"));
}
