//! Session Navigator
//!
//! Records navigation requests and keeps the search tab's URL, optionally
//! persisted in the [`JsonStore`] session block.

use std::cell::RefCell;

use crate::domain::ports::{NavigationError, Navigator, RepositoryError, UrlRequest, SEARCH_ROUTE};
use crate::infrastructure::repositories::JsonStore;

pub struct SessionNavigator {
    store: Option<JsonStore>,
    tab_url: RefCell<Option<String>>,
    history: RefCell<Vec<UrlRequest>>,
}

impl SessionNavigator {
    /// Navigator backed by the store's session block
    pub fn new(store: JsonStore) -> Result<Self, RepositoryError> {
        let tab_url = store.search_url()?;
        Ok(Self {
            store: Some(store),
            tab_url: RefCell::new(tab_url),
            history: RefCell::new(Vec::new()),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            store: None,
            tab_url: RefCell::new(None),
            history: RefCell::new(Vec::new()),
        }
    }

    /// Every request, oldest first
    pub fn history(&self) -> Vec<UrlRequest> {
        self.history.borrow().clone()
    }

    /// The most recent request
    pub fn current(&self) -> Option<UrlRequest> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for SessionNavigator {
    fn set_url(&self, request: UrlRequest) -> Result<(), NavigationError> {
        log::debug!("navigate to {}", request.full_url());

        // Only search routes belong to the search tab.
        if request.update_tab_state && request.url.starts_with(SEARCH_ROUTE) {
            let url = request.full_url();
            if let Some(store) = &self.store {
                store
                    .set_search_url(Some(url.clone()))
                    .map_err(|e| NavigationError::Persist {
                        message: e.to_string(),
                    })?;
            }
            *self.tab_url.borrow_mut() = Some(url);
        }

        self.history.borrow_mut().push(request);
        Ok(())
    }

    fn tab_search_url(&self) -> Option<String> {
        self.tab_url.borrow().clone()
    }
}
