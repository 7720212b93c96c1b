//! Create command handler

use anyhow::Result;

use tagtree::domain::entities::AttributeDef;
use tagtree::CreateRequest;

use super::{finish, open, GlobalArgs};

pub async fn cmd_create(
    args: &GlobalArgs,
    name: &str,
    super_types: Vec<String>,
    attributes: Vec<AttributeDef>,
    description: &str,
) -> Result<()> {
    let (mut tree, ui) = open(args).await?;

    let mut request = CreateRequest::new(name).with_description(description);
    for super_type in super_types {
        request = request.with_super_type(super_type);
    }
    for attribute in attributes {
        request = request.with_attribute(attribute);
    }

    let outcome = tree.create_classification(request).await.map(|_| ());
    finish(&tree, &ui, outcome)
}
