//! Classification type entity
//!
//! A classification (tag) definition as returned by the type-definition
//! endpoint. Field names follow the wire format (`superTypes`, `subTypes`,
//! `attributeDefs`) so the same struct reads stored and fetched payloads.

use serde::{Deserialize, Serialize};

/// Category assigned to classification definitions.
pub const CLASSIFICATION_CATEGORY: &str = "CLASSIFICATION";

/// Attribute definition carried by a classification type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDef {
    pub name: String,
    #[serde(default = "default_type_name")]
    pub type_name: String,
    #[serde(default = "default_true")]
    pub is_optional: bool,
    #[serde(default = "default_cardinality")]
    pub cardinality: String,
}

impl AttributeDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_optional: true,
            cardinality: default_cardinality(),
        }
    }
}

fn default_type_name() -> String {
    "string".to_string()
}

fn default_cardinality() -> String {
    "SINGLE".to_string()
}

fn default_true() -> bool {
    true
}

fn default_category() -> String {
    CLASSIFICATION_CATEGORY.to_string()
}

/// A classification type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationType {
    pub name: String,
    #[serde(default)]
    pub guid: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub super_types: Vec<String>,
    #[serde(default)]
    pub sub_types: Vec<String>,
    #[serde(default)]
    pub attribute_defs: Vec<AttributeDef>,
}

impl ClassificationType {
    /// Create a root classification with no relatives
    pub fn new(name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            category: default_category(),
            description: String::new(),
            super_types: Vec::new(),
            sub_types: Vec::new(),
            attribute_defs: Vec::new(),
        }
    }

    pub fn with_super_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.super_types = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sub_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_types = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDef) -> Self {
        self.attribute_defs.push(attribute);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn super_types(&self) -> &[String] {
        &self.super_types
    }

    pub fn sub_types(&self) -> &[String] {
        &self.sub_types
    }

    pub fn attribute_defs(&self) -> &[AttributeDef] {
        &self.attribute_defs
    }

    /// A root type has no super-types
    pub fn is_root(&self) -> bool {
        self.super_types.is_empty()
    }

    /// Append a sub-type name unless it is already listed.
    ///
    /// Returns `true` if the list changed.
    pub fn add_sub_type(&mut self, name: &str) -> bool {
        if self.sub_types.iter().any(|s| s == name) {
            return false;
        }
        self.sub_types.push(name.to_string());
        true
    }

    /// Drop a sub-type name. Returns `true` if it was present.
    pub fn remove_sub_type(&mut self, name: &str) -> bool {
        let before = self.sub_types.len();
        self.sub_types.retain(|s| s != name);
        self.sub_types.len() != before
    }
}
