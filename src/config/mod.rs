//! Configuration module for tagtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TAGTREE_*)
//! 3. Project config (./tagtree.toml)
//! 4. User config (~/.config/tagtree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_candidates, with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, StoreConfig, TreeConfig};
