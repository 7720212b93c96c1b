//! Error types for tagtree
//!
//! Uses `thiserror` for library errors. Port-level errors live next to
//! their ports and convert into [`TagTreeError`].

use thiserror::Error;

use crate::domain::ports::{NavigationError, RepositoryError};

/// Result type alias for tagtree operations
pub type TagTreeResult<T> = Result<T, TagTreeError>;

/// Generic message shown when an operation fails without a more specific notice.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Validation failures raised before any remote call is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The classification name is empty after trimming
    #[error("Classification name should not be empty")]
    EmptyName,

    /// At least one attribute row has a blank name
    #[error("Please fill the attributes or delete the input box")]
    IncompleteAttributes,

    /// New attributes collide with attributes inherited from a super-type
    #[error("{}", duplicate_message(.duplicates, .total))]
    DuplicateAttributes {
        /// Offending attribute names, as typed by the user
        duplicates: Vec<String>,
        /// Number of attributes submitted
        total: usize,
    },

    /// The wildcard search pattern is empty
    #[error("Search should not be empty!")]
    EmptySearch,
}

fn duplicate_message(duplicates: &[String], total: &usize) -> String {
    let total = *total;
    if duplicates.len() < 2 {
        format!("Attribute {} is duplicate !", duplicates.join(","))
    } else if total > duplicates.len() {
        format!("Attributes: {} are duplicate !", duplicates.join(","))
    } else {
        "All attributes are duplicate !".to_string()
    }
}

/// Main error type for tagtree operations
#[derive(Error, Debug)]
pub enum TagTreeError {
    /// Input rejected before reaching the repository
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A registry lookup for a tag or guid that no longer exists
    #[error("{what} not found")]
    NotFound { what: String },

    /// Remote repository failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Navigation could not be performed
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The user declined a confirmation prompt
    #[error("operation cancelled by user")]
    Cancelled,

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config {
        file: std::path::PathBuf,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagTreeError {
    /// Message shown to the user through the notifier.
    ///
    /// Validation errors carry their own wording. Everything else collapses
    /// to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            TagTreeError::Validation(err) => err.to_string(),
            _ => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_single() {
        let err = ValidationError::DuplicateAttributes {
            duplicates: vec!["Level".to_string()],
            total: 2,
        };
        assert_eq!(err.to_string(), "Attribute Level is duplicate !");
    }

    #[test]
    fn duplicate_message_several() {
        let err = ValidationError::DuplicateAttributes {
            duplicates: vec!["Level".to_string(), "owner".to_string()],
            total: 3,
        };
        assert_eq!(err.to_string(), "Attributes: Level,owner are duplicate !");
    }

    #[test]
    fn duplicate_message_all() {
        let err = ValidationError::DuplicateAttributes {
            duplicates: vec!["a".to_string(), "b".to_string()],
            total: 2,
        };
        assert_eq!(err.to_string(), "All attributes are duplicate !");
    }

    #[test]
    fn user_message_hides_internal_details() {
        let err = TagTreeError::NotFound {
            what: "classification guid-1".to_string(),
        };
        assert_eq!(err.user_message(), DEFAULT_ERROR_MESSAGE);

        let err = TagTreeError::from(ValidationError::EmptySearch);
        assert_eq!(err.user_message(), "Search should not be empty!");
    }
}
