//! Browse command handler
//!
//! Interactive tree navigation. Enter clicks the node under the cursor.

use anyhow::Result;

use tagtree::domain::ports::TreeWidget;
use tagtree::ui::widgets::tree_menu::run_interactive;

use super::{finish, open, GlobalArgs};

pub async fn cmd_browse(args: &GlobalArgs) -> Result<()> {
    let (mut tree, ui) = open(args).await?;

    if !ui.is_interactive() {
        anyhow::bail!("browse needs an interactive terminal");
    }

    if let Some(selected) = tree.widget().selected().map(|n| n.name.clone()) {
        tree.widget_mut().focus(&selected);
    }

    match run_interactive(tree.widget_mut(), ui.unicode)? {
        Some(name) => {
            log::debug!("clicked {}", name);
            tree.handle_widget_events();
        }
        None => log::debug!("browse left without a click"),
    }

    finish(&tree, &ui, Ok(()))
}
