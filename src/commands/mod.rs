//! Command handlers
//!
//! Every command opens the tree over the configured store, runs one
//! operation against it and prints the resulting report.

pub mod browse;
pub mod create;
pub mod delete;
pub mod refresh;
pub mod search;
pub mod select;
pub mod tree;

use std::path::PathBuf;

use anyhow::Result;

use tagtree::config::Config;
use tagtree::domain::entities::find_in_forest;
use tagtree::presentation::{
    create_notifier, open_tree_use_case, write_json_report, Cli, ColorWhen, ConcreteTreeUseCase,
    TextRenderer, TreeReport,
};
use tagtree::ui::UiContext;
use tagtree::{TagTreeError, TagTreeResult};

/// Flags shared by every command
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
    pub store: Option<PathBuf>,
    pub yes: bool,
}

impl From<&Cli> for GlobalArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            color: cli.color,
            verbose: cli.verbose,
            store: cli.store.clone(),
            yes: cli.yes,
        }
    }
}

/// Load config, wire the use case and sync it with the stored session
pub async fn open(args: &GlobalArgs) -> Result<(ConcreteTreeUseCase, UiContext)> {
    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::load_or_default(Some(&cwd));
    if let Some(store) = &args.store {
        config.store.path = store.clone();
    }

    let ui = UiContext::new(args.json, args.verbose, args.color, &config);
    for warning in &warnings {
        if ui.json {
            log::warn!("{}", warning);
        } else {
            eprintln!("Warning: {}", warning);
        }
    }
    log::debug!("using store {}", config.store.path.display());

    let notifier = create_notifier(&ui, args.yes);
    let tree = open_tree_use_case(&config, notifier).await?;
    Ok((tree, ui))
}

/// Look up the guid of a classification by name
pub fn guid_of(tree: &ConcreteTreeUseCase, name: &str) -> Result<String> {
    tree.registry()
        .get(name)
        .map(|ty| ty.guid.clone())
        .ok_or_else(|| anyhow::anyhow!("classification '{}' does not exist", name))
}

/// Print the report, then exit non-zero if the operation failed.
///
/// Failures were already shown through the notifier. A declined
/// confirmation is not a failure.
pub fn finish(tree: &ConcreteTreeUseCase, ui: &UiContext, outcome: TagTreeResult<()>) -> Result<()> {
    let navigations = tree.navigator().history();
    let report = TreeReport {
        menu: tree.widget(),
        options: tree.options(),
        navigations: &navigations,
        diagnostics: tree.diagnostics(),
    };

    if ui.json {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        write_json_report(&mut lock, &report)?;
    } else {
        let renderer = TextRenderer {
            color: ui.color,
            unicode: ui.unicode,
        };
        println!("{}", renderer.render(&report));
    }

    match outcome {
        Ok(()) | Err(TagTreeError::Cancelled) => Ok(()),
        Err(err) => {
            log::debug!("command failed: {}", err);
            std::process::exit(1);
        }
    }
}

/// Make sure the named node can be clicked
pub fn ensure_shown(tree: &ConcreteTreeUseCase, guid: &str, name: &str) -> Result<()> {
    if find_in_forest(tree.widget().nodes(), guid).is_none() {
        anyhow::bail!(
            "classification '{}' is hidden as unused (set TAGTREE_SHOW_EMPTY=1 to show it)",
            name
        );
    }
    Ok(())
}
