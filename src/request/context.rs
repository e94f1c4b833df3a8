use std::cell::OnceCell;

use tracing::debug;
use url::form_urlencoded;

use crate::collections::{Map, ReadOnlyMap};
use crate::value::Value;

const ARRAY_SUFFIX: &str = "[]";

/// The query string and form parameters of a single request.
///
/// Both sides are `application/x-www-form-urlencoded`. Repeated keys keep the last value, except
/// for keys ending in `[]`, whose values are collected into an array stored under the key
/// without the suffix.
///
/// # Examples
/// ```
/// # use toolkit_core::request::RequestContext;
/// # use toolkit_core::value::Value;
/// let request = RequestContext::new("?page=2&tag[]=a&tag[]=b", "name=J%C3%BCrgen+M");
/// assert_eq!(request.get().find("page"), Some(&Value::from("2")));
/// assert_eq!(
///     request.get_param("tag"),
///     Some(&Value::from(vec![Value::from("a"), Value::from("b")]))
/// );
/// assert_eq!(request.post_param("name"), Some(&Value::from("Jürgen M")));
/// ```
#[derive(Debug, Default)]
pub struct RequestContext {
    query: String,
    form: String,
    get: OnceCell<ReadOnlyMap>,
    post: OnceCell<ReadOnlyMap>,
}

impl RequestContext {
    pub fn new(query: &str, form: &str) -> RequestContext {
        RequestContext {
            query: query.strip_prefix('?').unwrap_or(query).to_owned(),
            form: form.to_owned(),
            get: OnceCell::new(),
            post: OnceCell::new(),
        }
    }

    /// Creates a context for a request without a body.
    pub fn from_query(query: &str) -> RequestContext {
        RequestContext::new(query, "")
    }

    /// The query string parameters.
    pub fn get(&self) -> &ReadOnlyMap {
        self.get.get_or_init(|| {
            debug!(len = self.query.len(), "parsing query string parameters");
            parse_params(&self.query)
        })
    }

    /// The form parameters.
    pub fn post(&self) -> &ReadOnlyMap {
        self.post.get_or_init(|| {
            debug!(len = self.form.len(), "parsing form parameters");
            parse_params(&self.form)
        })
    }

    /// Returns the query string parameter called `key`.
    pub fn get_param(&self, key: &str) -> Option<&Value> {
        self.get().find(key)
    }

    /// Returns the form parameter called `key`.
    pub fn post_param(&self, key: &str) -> Option<&Value> {
        self.post().find(key)
    }
}

/// Parses `application/x-www-form-urlencoded` input into an untyped, read-only map of strings
/// and arrays of strings.
pub fn parse_params(input: &str) -> ReadOnlyMap {
    let mut entries: Vec<(String, Value)> = Vec::new();

    for (key, value) in form_urlencoded::parse(input.as_bytes()) {
        let key = key.into_owned();
        let value = Value::from(value.into_owned());

        let Some(base) = key.strip_suffix(ARRAY_SUFFIX) else {
            entries.push((key, value));
            continue;
        };

        match entries.iter_mut().find(|(name, _)| name == base) {
            Some((_, Value::Array(items))) => items.push(value),
            Some((_, existing)) => *existing = Value::Array(vec![value]),
            None => entries.push((base.to_owned(), Value::Array(vec![value]))),
        }
    }

    // Collecting keeps the last value of a repeated key.
    ReadOnlyMap::new(entries.into_iter().collect::<Map>())
}
