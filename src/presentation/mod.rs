//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the tree use case with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Tree report rendering
//!
//! ## Usage
//!
//! ```ignore
//! use tagtree::presentation::factory;
//!
//! let mut tree = factory::open_tree_use_case(&config, notifier).await?;
//! tree.search_selected()?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_notifier, open_tree_use_case, ConcreteTreeUseCase};
pub use output::{write_json_report, TextRenderer, TreeReport};
