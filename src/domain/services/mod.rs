//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod attribute_validator;
mod tree_builder;
mod tree_search;

pub use attribute_validator::{normalize_attributes, validate_new_classification};
pub use tree_builder::{build_tree, TreeBuild, TreeDiagnostic};
pub use tree_search::{filter_matches, matches_query};
