//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod classification_repository;
pub mod metrics_repository;
pub mod navigator;
pub mod notifier;
pub mod tree_widget;

pub use classification_repository::{
    ClassificationRepository, FetchMode, RepositoryError, TypeDefsPayload,
};
pub use metrics_repository::MetricsRepository;
pub use navigator::{
    NavigationError, Navigator, UrlRequest, SEARCH_RESULT_ROUTE, SEARCH_ROUTE, TAG_DETAIL_ROUTE,
};
pub use notifier::{NoopNotifier, Notice, Notifier};
pub use tree_widget::{TreeWidget, WidgetEvent};
