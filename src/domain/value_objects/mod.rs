//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod count_format;
mod search_params;
mod tree_options;

pub use count_format::{format_count, node_label};
pub use search_params::{build_url, SearchParams, BASIC_SEARCH};
pub use tree_options::TreeOptions;
