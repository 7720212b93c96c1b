//! Wildcard search command handler

use anyhow::Result;

use super::{finish, open, GlobalArgs};

pub async fn cmd_search(args: &GlobalArgs, pattern: &str) -> Result<()> {
    let (mut tree, ui) = open(args).await?;
    let outcome = tree.wildcard_search(pattern);
    finish(&tree, &ui, outcome)
}
