//! Select command handler
//!
//! Clicks a node: the first click filters the search by the
//! classification, a click on the selected node clears the filter.

use anyhow::Result;

use tagtree::domain::ports::TreeWidget;

use super::{ensure_shown, finish, guid_of, open, GlobalArgs};

pub async fn cmd_select(args: &GlobalArgs, name: &str) -> Result<()> {
    let (mut tree, ui) = open(args).await?;

    let guid = guid_of(&tree, name)?;
    ensure_shown(&tree, &guid, name)?;

    tree.widget_mut().select_node(&guid);
    tree.handle_widget_events();

    finish(&tree, &ui, Ok(()))
}
