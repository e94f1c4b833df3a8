#![cfg(test)]

use super::*;
use crate::value::Value;

fn strings(items: &[&str]) -> Value {
    Value::from(items.iter().copied().map(Value::from).collect::<Vec<_>>())
}

#[test]
fn test_query_parameters() {
    let request = RequestContext::from_query("?q=rust+lang&page=3&empty=");

    assert_eq!(request.get_param("q"), Some(&Value::from("rust lang")));
    assert_eq!(request.get_param("page"), Some(&Value::from("3")));
    assert_eq!(request.get_param("empty"), Some(&Value::from("")));
    assert_eq!(request.get_param("missing"), None);
    assert!(request.post().is_empty());
}

#[test]
fn test_form_parameters() {
    let request = RequestContext::new("", "user=a%26b&note=caf%C3%A9");

    assert_eq!(request.post_param("user"), Some(&Value::from("a&b")));
    assert_eq!(request.post_param("note"), Some(&Value::from("café")));
    assert!(request.get().is_empty());
}

#[test]
fn test_repeated_keys() {
    let params = parse_params("a=1&b=2&a=3");
    assert_eq!(params.count(), 2);
    assert_eq!(params.find("a"), Some(&Value::from("3")), "The last value should win.");
    assert_eq!(params.iter_keys().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn test_array_keys() {
    let params = parse_params("id[]=1&id[]=2&x=y&id[]=3");
    assert_eq!(params.find("id"), Some(&strings(&["1", "2", "3"])));
    assert!(!params.contains("id[]"));
}

#[test]
fn test_parsed_once() {
    let request = RequestContext::from_query("a=1");
    let first: *const _ = request.get();
    let second: *const _ = request.get();
    assert_eq!(first, second, "The same map should be handed out every time.");
}

#[test]
fn test_read_only() {
    let request = RequestContext::from_query("a=1");
    assert!(request.get().insert("b", Value::from("2")).is_err());
    assert!(request.get().clear().is_err());
    assert_eq!(request.get().count(), 1);
}
