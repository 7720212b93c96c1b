//! Tree command handler

use anyhow::Result;

use super::{finish, open, GlobalArgs};

pub async fn cmd_tree(
    args: &GlobalArgs,
    flat: bool,
    show_empty: bool,
    tag: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let (mut tree, ui) = open(args).await?;

    if flat && tree.options().group_view {
        tree.toggle_group_view();
    }
    if show_empty {
        tree.set_show_empty(true);
    }
    if let Some(tag) = tag {
        let mut value = tree.value().clone();
        value.tag = Some(tag);
        tree.manual_render(value);
    }
    if let Some(text) = search {
        let matches = tree.search_tree(&text);
        log::debug!("'{}' matched {} classifications", text, matches);
    }

    finish(&tree, &ui, Ok(()))
}
