//! Domain Entities
//!
//! Core business objects of the classification tree.

pub mod classification;
pub mod count_index;
pub mod display_node;
pub mod registry;

pub use classification::{AttributeDef, ClassificationType, CLASSIFICATION_CATEGORY};
pub use count_index::EntityCountIndex;
pub use display_node::{
    find_in_forest, walk_forest, DisplayNode, NodeState, CLASSIFICATION_GTYPE, TAG_ICON,
};
pub use registry::ClassificationRegistry;
