//! Navigator port
//!
//! Pushes URL/search state to the application router and exposes the
//! persisted search URL of the search tab.

use crate::domain::value_objects::{build_url, SearchParams};

/// Route of the result listing
pub const SEARCH_RESULT_ROUTE: &str = "#!/search/searchResult";
/// Route of the default (empty) search page
pub const SEARCH_ROUTE: &str = "#!/search";
/// Prefix of the classification detail route
pub const TAG_DETAIL_ROUTE: &str = "#!/tag/tagAttribute/";

/// A navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRequest {
    pub url: String,
    pub params: Option<SearchParams>,
    pub merge_browser_url: bool,
    /// Dependent views react to the change
    pub trigger: bool,
    /// Persist as the search tab's state
    pub update_tab_state: bool,
}

impl UrlRequest {
    /// Search navigation with explicit parameters
    pub fn search(route: impl Into<String>, params: SearchParams) -> Self {
        Self {
            url: route.into(),
            params: Some(params),
            merge_browser_url: false,
            trigger: true,
            update_tab_state: true,
        }
    }

    /// Plain route change without parameters
    pub fn route(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: None,
            merge_browser_url: false,
            trigger: true,
            update_tab_state: true,
        }
    }

    /// Detail page of a classification
    pub fn tag_detail(name: &str) -> Self {
        Self::route(format!("{}{}", TAG_DETAIL_ROUTE, name))
    }

    /// The URL with its query string
    pub fn full_url(&self) -> String {
        match &self.params {
            Some(params) => build_url(&self.url, params),
            None => self.url.clone(),
        }
    }
}

pub trait Navigator {
    fn set_url(&self, request: UrlRequest) -> Result<(), NavigationError>;

    /// Last search URL persisted for the search tab
    fn tab_search_url(&self) -> Option<String>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("failed to persist navigation state: {message}")]
    Persist { message: String },
}
