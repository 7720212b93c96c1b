//! ClassificationRepository port
//!
//! Remote access to classification type definitions: list, create, delete.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ClassificationType;

/// How a remote call reports failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Failures are surfaced to the user by the caller
    #[default]
    Default,
    /// Failures are only logged; the last-good state stays visible
    Silent,
}

impl FetchMode {
    pub fn is_silent(&self) -> bool {
        matches!(self, FetchMode::Silent)
    }
}

/// Type-definition envelope used by the create endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefsPayload {
    #[serde(default)]
    pub classification_defs: Vec<ClassificationType>,
    #[serde(default)]
    pub entity_defs: Vec<serde_json::Value>,
    #[serde(default)]
    pub enum_defs: Vec<serde_json::Value>,
    #[serde(default)]
    pub struct_defs: Vec<serde_json::Value>,
}

impl TypeDefsPayload {
    pub fn classification(def: ClassificationType) -> Self {
        Self {
            classification_defs: vec![def],
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
pub trait ClassificationRepository {
    async fn fetch_all(&self, mode: FetchMode)
        -> Result<Vec<ClassificationType>, RepositoryError>;

    /// Persist new definitions; the response echoes what the server stored
    async fn save(&self, payload: TypeDefsPayload) -> Result<TypeDefsPayload, RepositoryError>;

    async fn delete_by_name(&self, name: &str) -> Result<(), RepositoryError>;

    /// Refresh the type-header cache used by search pickers
    async fn reload_type_headers(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{operation} failed: {message}")]
    Unavailable { operation: String, message: String },

    #[error("classification '{name}' not found")]
    NotFound { name: String },

    #[error("classification '{name}' already exists")]
    AlreadyExists { name: String },

    #[error(
        "store file corrupted: {path}\n  → Fix: restore it from a backup or delete it\n  → Details: {message}"
    )]
    Corrupted { path: std::path::PathBuf, message: String },
}

impl RepositoryError {
    pub fn unavailable(operation: &str, message: impl ToString) -> Self {
        RepositoryError::Unavailable {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }
}
