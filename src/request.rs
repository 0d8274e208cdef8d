//! Request descriptors and the factory that builds them.
//!
//! A descriptor is pure data: it is constructed eagerly (one per resource id
//! for batch operations), handed to the executor, and never mutated after
//! construction. Deferring execution through value objects instead of
//! captured closures keeps per-item request state explicit.

use std::collections::HashMap;

use crate::endpoints;
use crate::options::ClientOptions;

/// HTTP verb for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

/// One deferred, unexecuted HTTP request. Built once, executed at most once.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub verb: Verb,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn new(verb: Verb, url: impl Into<String>) -> Self {
        Self {
            verb,
            url: url.into(),
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Build a single descriptor for a path template with no id substitution.
pub fn build_one(options: &ClientOptions, verb: Verb, template: &str) -> RequestDescriptor {
    RequestDescriptor::new(verb, format!("{}{}", options.base_url(), template))
        .header("Authorization", options.authorization_header())
}

/// Build a single descriptor for a path template addressing one resource id.
pub fn build_for_id(
    options: &ClientOptions,
    verb: Verb,
    template: &str,
    id: &str,
) -> RequestDescriptor {
    let path = endpoints::interpolate(template, id);
    RequestDescriptor::new(verb, format!("{}{}", options.base_url(), path))
        .header("Authorization", options.authorization_header())
}

/// Build one descriptor per id, substituting each id into the path template.
///
/// Descriptor i corresponds to id i; the executor relies on this positional
/// correspondence to reassemble results.
pub fn build_many(
    options: &ClientOptions,
    verb: Verb,
    template: &str,
    ids: &[String],
) -> Vec<RequestDescriptor> {
    ids.iter()
        .map(|id| build_for_id(options, verb, template, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::ONE_CALENDAR;

    fn opts() -> ClientOptions {
        ClientOptions::new("tok").with_base_url("http://localhost:4010")
    }

    #[test]
    fn descriptor_order_matches_id_order() {
        let ids = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let descriptors = build_many(&opts(), Verb::Get, ONE_CALENDAR, &ids);

        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].url, "http://localhost:4010/calendars/a");
        assert_eq!(descriptors[1].url, "http://localhost:4010/calendars/b");
        assert_eq!(descriptors[2].url, "http://localhost:4010/calendars/a");
    }

    #[test]
    fn descriptors_carry_auth_header() {
        let ids = vec!["a".to_string()];
        let descriptors = build_many(&opts(), Verb::Delete, ONE_CALENDAR, &ids);

        assert_eq!(descriptors[0].verb, Verb::Delete);
        assert_eq!(
            descriptors[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer tok")
        );
    }

    #[test]
    fn build_one_has_no_substitution() {
        let d = build_one(&opts(), Verb::Post, crate::endpoints::SCHEDULING_PAGES);
        assert_eq!(d.url, "http://localhost:4010/manage/pages");
        assert!(d.body.is_none());
    }
}
