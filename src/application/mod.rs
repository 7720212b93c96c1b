//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ClassificationTreeUseCase` - Tree rendering, selection sync, create and delete

pub mod tree;

pub use tree::{
    ClassificationTreeUseCase, CountUpdate, CreateRequest, SelectionFlags, DELETE_CONFIRMATION,
};
