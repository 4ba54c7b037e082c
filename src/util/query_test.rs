use super::*;

#[test]
fn parse_strips_question_mark_and_decodes() {
    let query = QueryString::parse("?filter=backend&search=rest+api&note=a%26b");
    assert_eq!(query.get("filter"), Some("backend"));
    assert_eq!(query.get("search"), Some("rest api"));
    assert_eq!(query.get("note"), Some("a&b"));
    assert_eq!(query.get("missing"), None);
}

#[test]
fn parse_handles_empty_and_valueless_parts() {
    assert!(QueryString::parse("").is_empty());
    assert!(QueryString::parse("?").is_empty());
    let query = QueryString::parse("flag&&x=1");
    assert_eq!(query.get("flag"), Some(""));
    assert_eq!(query.get("x"), Some("1"));
}

#[test]
fn set_replaces_in_place_and_collapses_duplicates() {
    let mut query = QueryString::parse("a=1&filter=x&b=2&filter=y");
    query.set("filter", "web");
    assert_eq!(query.to_string(), "a=1&filter=web&b=2");
}

#[test]
fn set_appends_new_keys_and_remove_drops_them() {
    let mut query = QueryString::parse("a=1");
    query.set("search", "c++ tools");
    assert_eq!(query.to_string(), "a=1&search=c%2B%2B%20tools");
    query.remove("search");
    assert_eq!(query.to_string(), "a=1");
}

#[test]
fn malformed_escape_falls_back_to_raw_text() {
    let query = QueryString::parse("search=%E0%A4%A");
    assert_eq!(query.get("search"), Some("%E0%A4%A"));
}
