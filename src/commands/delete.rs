//! Delete command handler

use anyhow::Result;

use super::{finish, guid_of, open, GlobalArgs};

pub async fn cmd_delete(args: &GlobalArgs, name: &str) -> Result<()> {
    let (mut tree, ui) = open(args).await?;

    // Deletion acts on the selected tag.
    guid_of(&tree, name)?;
    let mut value = tree.value().clone();
    value.tag = Some(name.to_string());
    tree.manual_render(value);

    let outcome = tree.request_delete().await;
    finish(&tree, &ui, outcome)
}
