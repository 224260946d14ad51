//! List query descriptor - pagination, filters and relation includes
//!
//! The shape mirrors the wire format the list endpoints accept:
//! `{page: {limit, offset}, filter: {<field>: <value>}, include: {<rel>: true}}`.
//! A list controller builds a default query (page window + substring name
//! filter) and merges a caller-supplied static query over it; the caller's
//! values win on key collision.

use crate::record::FieldMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Pagination window of a list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: u64,
    pub offset: u64,
}

/// Filter/include/pagination descriptor sent to `get_many`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageQuery>,

    #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
    pub filter: FieldMap,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub include: BTreeMap<String, bool>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, limit: u64, offset: u64) -> Self {
        self.page = Some(PageQuery { limit, offset });
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }

    pub fn include(mut self, relation: impl Into<String>) -> Self {
        self.include.insert(relation.into(), true);
        self
    }

    /// Merge `overrides` into this query; override values win per key
    pub fn merge(mut self, overrides: &Query) -> Self {
        if let Some(page) = overrides.page {
            self.page = Some(page);
        }
        for (key, value) in &overrides.filter {
            self.filter.insert(key.clone(), value.clone());
        }
        for (key, value) in &overrides.include {
            self.include.insert(key.clone(), *value);
        }
        self
    }

    /// Flatten into URL query parameters (`page[limit]=10&filter[name]=~x&include=realm`)
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page {
            params.push(("page[limit]".to_string(), page.limit.to_string()));
            params.push(("page[offset]".to_string(), page.offset.to_string()));
        }

        for (field, value) in &self.filter {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            params.push((format!("filter[{field}]"), rendered));
        }

        let includes: Vec<&str> = self
            .include
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(relation, _)| relation.as_str())
            .collect();
        if !includes.is_empty() {
            params.push(("include".to_string(), includes.join(",")));
        }

        params
    }
}

/// Substring filter convention: non-empty search text is prefixed with `~`
/// ("contains"); empty text is sent as-is.
pub fn substring_filter(q: &str) -> Value {
    if q.is_empty() {
        Value::String(String::new())
    } else {
        Value::String(format!("~{q}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_override_wins_on_collision() {
        let base = Query::new()
            .page(10, 0)
            .filter("name", "~abc")
            .include("realm");
        let overrides = Query::new().page(25, 50).filter("name", "exact");

        let merged = base.merge(&overrides);
        assert_eq!(merged.page, Some(PageQuery { limit: 25, offset: 50 }));
        assert_eq!(merged.filter.get("name"), Some(&json!("exact")));
        assert_eq!(merged.include.get("realm"), Some(&true));
    }

    #[test]
    fn test_merge_keeps_disjoint_keys() {
        let base = Query::new().filter("name", "~abc");
        let overrides = Query::new().filter("realm_id", "master");

        let merged = base.merge(&overrides);
        assert_eq!(merged.filter.get("name"), Some(&json!("~abc")));
        assert_eq!(merged.filter.get("realm_id"), Some(&json!("master")));
    }

    #[test]
    fn test_substring_filter_marks_non_empty_text() {
        assert_eq!(substring_filter("adm"), json!("~adm"));
        assert_eq!(substring_filter(""), json!(""));
    }

    #[test]
    fn test_to_params_flattens_sections() {
        let query = Query::new()
            .page(10, 20)
            .filter("name", "~abc")
            .include("realm");

        let params = query.to_params();
        assert!(params.contains(&("page[limit]".to_string(), "10".to_string())));
        assert!(params.contains(&("page[offset]".to_string(), "20".to_string())));
        assert!(params.contains(&("filter[name]".to_string(), "~abc".to_string())));
        assert!(params.contains(&("include".to_string(), "realm".to_string())));
    }
}
