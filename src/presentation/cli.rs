//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --store, --yes) are inherited by all subcommands
//! - Without a subcommand the tree is printed

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::entities::AttributeDef;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// tagtree - browse and maintain a classification tree
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// NDJSON output instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path of the JSON store (overrides config and TAGTREE_STORE)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Answer confirmations with yes
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the classification tree
    Tree {
        /// Flat list instead of the super-type hierarchy
        #[arg(long)]
        flat: bool,

        /// Include classifications no entity carries
        #[arg(long)]
        show_empty: bool,

        /// Render with this classification selected
        #[arg(long, value_name = "NAME")]
        tag: Option<String>,

        /// Show only nodes matching TEXT
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },

    /// Click a classification: search by it, or clear it when already selected
    Select {
        name: String,
    },

    /// Create a classification
    Create {
        name: String,

        /// Super-type (repeatable)
        #[arg(long = "super", value_name = "NAME")]
        super_types: Vec<String>,

        /// Attribute as NAME or NAME:TYPE (repeatable)
        #[arg(long = "attr", value_name = "NAME[:TYPE]", value_parser = parse_attribute)]
        attributes: Vec<AttributeDef>,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a classification
    Delete {
        name: String,
    },

    /// Search entities by a wildcard classification pattern
    Search {
        pattern: String,
    },

    /// Re-fetch classifications and counts
    Refresh,

    /// Navigate the tree interactively
    Browse,
}

/// Parse `NAME[:TYPE]`; the type defaults to `string`
pub fn parse_attribute(raw: &str) -> Result<AttributeDef, String> {
    let (name, type_name) = match raw.split_once(':') {
        Some((name, type_name)) => (name, type_name.trim()),
        None => (raw, "string"),
    };
    if type_name.is_empty() {
        return Err(format!("missing attribute type in '{}'", raw));
    }
    Ok(AttributeDef::new(name, type_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["tagtree"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_tree_flags() {
        let cli = Cli::try_parse_from([
            "tagtree",
            "tree",
            "--flat",
            "--show-empty",
            "--tag",
            "PII",
            "--search",
            "pi",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Tree {
                flat,
                show_empty,
                tag,
                search,
            }) => {
                assert!(flat);
                assert!(show_empty);
                assert_eq!(tag.as_deref(), Some("PII"));
                assert_eq!(search.as_deref(), Some("pi"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_create_repeatable_args() {
        let cli = Cli::try_parse_from([
            "tagtree",
            "create",
            "PII",
            "--super",
            "Sensitive",
            "--super",
            "Legal",
            "--attr",
            "level:int",
            "--attr",
            "owner",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create {
                name,
                super_types,
                attributes,
                description,
            }) => {
                assert_eq!(name, "PII");
                assert_eq!(super_types, vec!["Sensitive", "Legal"]);
                assert_eq!(attributes[0], AttributeDef::new("level", "int"));
                assert_eq!(attributes[1], AttributeDef::new("owner", "string"));
                assert!(description.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tagtree", "delete", "PII", "--yes", "--color", "never", "-vv"])
                .unwrap();
        assert!(cli.yes);
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_attribute_rejects_missing_type() {
        assert!(parse_attribute("level:").is_err());
    }
}
