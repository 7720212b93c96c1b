//! Controller state that lives between widget notifications.

use crate::domain::entities::{AttributeDef, EntityCountIndex};

/// One-shot flags consumed by the next `SelectNode` notification.
///
/// Both mark a selection change the controller caused itself, which must
/// not be treated as a user click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    /// Set when a manual render selected a node in the widget
    pub from_manual_render: bool,
    /// Set when counts or the registry were refreshed
    pub tree_update: bool,
}

impl SelectionFlags {
    /// Consume one pending flag. Returns `true` if the notification is swallowed.
    pub fn consume(&mut self) -> bool {
        if self.from_manual_render {
            self.from_manual_render = false;
            true
        } else if self.tree_update {
            self.tree_update = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.from_manual_render || self.tree_update
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// How new entity counts arrive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountUpdate {
    /// A sibling view already fetched the counts
    Fresh(EntityCountIndex),
    /// Fetch the counts before rebuilding
    Refetch,
}

/// Input of the create dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRequest {
    pub name: String,
    pub description: String,
    pub super_types: Vec<String>,
    pub attributes: Vec<AttributeDef>,
}

impl CreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_super_type(mut self, name: impl Into<String>) -> Self {
        self.super_types.push(name.into());
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDef) -> Self {
        self.attributes.push(attribute);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_render_flag_is_consumed_first() {
        let mut flags = SelectionFlags {
            from_manual_render: true,
            tree_update: true,
        };
        assert!(flags.consume());
        assert!(!flags.from_manual_render);
        assert!(flags.tree_update);
        assert!(flags.consume());
        assert!(!flags.consume());
    }

    #[test]
    fn clear_resets_everything() {
        let mut flags = SelectionFlags {
            from_manual_render: false,
            tree_update: true,
        };
        assert!(flags.is_pending());
        flags.clear();
        assert!(!flags.is_pending());
    }

    #[test]
    fn create_request_builder() {
        let request = CreateRequest::new("PII")
            .with_super_type("Sensitive")
            .with_attribute(AttributeDef::new("level", "string"));
        assert_eq!(request.super_types, vec!["Sensitive"]);
        assert_eq!(request.attributes.len(), 1);
    }
}
