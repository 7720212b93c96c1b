//! tagtree CLI - classification tree browser
//!
//! Usage: tagtree [COMMAND]
//!
//! Commands:
//!   tree     Print the classification tree
//!   select   Click a classification
//!   create   Create a classification
//!   delete   Delete a classification
//!   search   Wildcard tag search
//!   refresh  Re-fetch classifications and counts
//!   browse   Navigate the tree interactively

use anyhow::Result;
use clap::Parser;

use tagtree::presentation::{Cli, Commands};

mod commands;

use commands::GlobalArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = GlobalArgs::from(&cli);
    match cli.command {
        None => commands::tree::cmd_tree(&args, false, false, None, None).await,
        Some(Commands::Tree {
            flat,
            show_empty,
            tag,
            search,
        }) => commands::tree::cmd_tree(&args, flat, show_empty, tag, search).await,
        Some(Commands::Select { name }) => commands::select::cmd_select(&args, &name).await,
        Some(Commands::Create {
            name,
            super_types,
            attributes,
            description,
        }) => {
            commands::create::cmd_create(&args, &name, super_types, attributes, &description)
                .await
        }
        Some(Commands::Delete { name }) => commands::delete::cmd_delete(&args, &name).await,
        Some(Commands::Search { pattern }) => commands::search::cmd_search(&args, &pattern).await,
        Some(Commands::Refresh) => commands::refresh::cmd_refresh(&args).await,
        Some(Commands::Browse) => commands::browse::cmd_browse(&args).await,
    }
}

/// Map `-v` counts to a log level; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
