//! Search parameters value object
//!
//! The search state shared with the URL router (`#!/search/searchResult?...`).
//! Only the keys the tree reads or writes are typed; anything else is
//! carried through untouched in `extra`.

use std::collections::BTreeMap;

/// Search type written by every tree-issued search
pub const BASIC_SEARCH: &str = "basic";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub search_type: Option<String>,
    pub dsl_checked: Option<bool>,
    /// Entity type filter (`type=`)
    pub type_name: Option<String>,
    pub tag: Option<String>,
    pub term: Option<String>,
    pub query: Option<String>,
    pub tag_filters: Option<String>,
    pub is_cf: Option<bool>,
    pub extra: BTreeMap<String, String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Params carrying only a tag filter
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Force a basic (non-DSL) search
    pub fn into_basic(mut self) -> Self {
        self.search_type = Some(BASIC_SEARCH.to_string());
        self.dsl_checked = Some(false);
        self
    }

    /// Any constraint besides the tag that keeps a result listing meaningful
    pub fn has_non_tag_constraint(&self) -> bool {
        self.type_name.is_some() || self.term.is_some() || self.query.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }

    /// Key/value pairs in a stable order, omitting unset keys
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key.to_string(), value));
            }
        };
        push("searchType", self.search_type.clone());
        push("dslChecked", self.dsl_checked.map(|b| b.to_string()));
        push("type", self.type_name.clone());
        push("tag", self.tag.clone());
        push("term", self.term.clone());
        push("query", self.query.clone());
        push("tagFilters", self.tag_filters.clone());
        push("isCF", self.is_cf.map(|b| b.to_string()));
        for (key, value) in &self.extra {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "searchType" => params.search_type = Some(value),
                "dslChecked" => params.dsl_checked = value.parse().ok(),
                "type" => params.type_name = Some(value),
                "tag" => params.tag = Some(value),
                "term" => params.term = Some(value),
                "query" => params.query = Some(value),
                "tagFilters" => params.tag_filters = Some(value),
                "isCF" => params.is_cf = value.parse().ok(),
                other => {
                    params.extra.insert(other.to_string(), value);
                }
            }
        }
        params
    }

    /// Encode as `key=value&...`
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse the query part of a URL. Text before `?` is ignored when present.
    pub fn from_url(url: &str) -> Self {
        let query = match url.split_once('?') {
            Some((_, query)) => query,
            None if url.contains('=') => url,
            None => "",
        };
        Self::from_pairs(
            query
                .split('&')
                .filter(|part| !part.is_empty())
                .map(|part| match part.split_once('=') {
                    Some((k, v)) => (decode_component(k), decode_component(v)),
                    None => (decode_component(part), String::new()),
                }),
        )
    }
}

/// Join a route and its parameters into a hash URL
pub fn build_url(route: &str, params: &SearchParams) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        route.to_string()
    } else {
        format!("{}?{}", route, query)
    }
}

fn encode_component(raw: &str) -> String {
    // `*` stays literal so wildcard tag patterns read as typed
    urlencoding::encode(raw).replace("%2A", "*")
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
