//! Refresh command handler

use anyhow::Result;

use tagtree::ui::progress::loading_spinner;

use super::{finish, open, GlobalArgs};

pub async fn cmd_refresh(args: &GlobalArgs) -> Result<()> {
    let (mut tree, ui) = open(args).await?;

    let spinner = loading_spinner(&ui, "Refreshing classifications...");
    tree.refresh().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    finish(&tree, &ui, Ok(()))
}
