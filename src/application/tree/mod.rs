//! Classification Tree Use Case
//!
//! Keeps the tree widget, the selected tag and the search state in sync.
//!
//! This module handles:
//! - Building and (re)loading the tree into the widget
//! - Reconciling widget selection with router-driven search parameters
//! - Count updates and full refreshes
//! - Creating and deleting classifications

mod lifecycle;
mod state;
mod use_case;


pub use lifecycle::DELETE_CONFIRMATION;
pub use state::{CountUpdate, CreateRequest, SelectionFlags};
pub use use_case::ClassificationTreeUseCase;
