//! MetricsRepository port
//!
//! Fetches the per-classification entity counts.

use async_trait::async_trait;

use super::classification_repository::{FetchMode, RepositoryError};
use crate::domain::entities::EntityCountIndex;

#[async_trait(?Send)]
pub trait MetricsRepository {
    async fn fetch_counts(&self, mode: FetchMode) -> Result<EntityCountIndex, RepositoryError>;
}
