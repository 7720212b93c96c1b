//! tagtree - classification tree builder and selection reconciler
//!
//! Builds a browsable tree of classification types (tags) from their
//! super/sub-type relations and entity counts, and keeps the tree's
//! selection in sync with the search state shared with a URL router.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{ClassificationTreeUseCase, CountUpdate, CreateRequest};
pub use config::Config;
pub use domain::entities::{
    AttributeDef, ClassificationRegistry, ClassificationType, DisplayNode, EntityCountIndex,
};
pub use domain::services::{build_tree, TreeBuild, TreeDiagnostic};
pub use domain::value_objects::{SearchParams, TreeOptions};
pub use error::{TagTreeError, TagTreeResult, ValidationError};
