//! Tree display options
//!
//! - `show_empty`: include classifications no entity carries
//! - `group_view`: hierarchical tree instead of a flat list

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeOptions {
    #[serde(default)]
    pub show_empty: bool,
    #[serde(default = "default_true")]
    pub group_view: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            show_empty: false,
            group_view: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl TreeOptions {
    pub fn group() -> Self {
        Self::default()
    }

    pub fn flat() -> Self {
        Self {
            group_view: false,
            ..Self::default()
        }
    }

    pub fn with_show_empty(mut self, show_empty: bool) -> Self {
        self.show_empty = show_empty;
        self
    }

    /// Label of the toggle that flips `show_empty`
    pub fn empty_toggle_label(&self) -> &'static str {
        if self.show_empty {
            "Hide unused classification"
        } else {
            "Show unused classification"
        }
    }

    /// Label of the toggle that flips `group_view`
    pub fn view_toggle_label(&self) -> &'static str {
        if self.group_view {
            "Show flat tree"
        } else {
            "Show group tree"
        }
    }
}
