//! Validation of a new classification before it is sent to the server.

use crate::domain::entities::{AttributeDef, ClassificationType};
use crate::error::ValidationError;

/// Drop the placeholder row: a single attribute with a blank name means
/// "no attributes".
pub fn normalize_attributes(mut attributes: Vec<AttributeDef>) -> Vec<AttributeDef> {
    if attributes.len() == 1 && attributes[0].name.trim().is_empty() {
        attributes.clear();
    }
    attributes
}

/// Check a create request against the chosen super-types.
///
/// Attribute names may not repeat (case-insensitively) an attribute
/// inherited from any super-type.
pub fn validate_new_classification(
    name: &str,
    attributes: &[AttributeDef],
    super_types: &[&ClassificationType],
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if attributes.iter().any(|a| a.name.trim().is_empty()) {
        return Err(ValidationError::IncompleteAttributes);
    }

    let inherited: Vec<String> = super_types
        .iter()
        .flat_map(|ty| ty.attribute_defs())
        .map(|a| a.name.to_lowercase())
        .collect();

    let duplicates: Vec<String> = attributes
        .iter()
        .filter(|a| inherited.contains(&a.name.to_lowercase()))
        .map(|a| a.name.clone())
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::DuplicateAttributes {
            duplicates,
            total: attributes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensitive() -> ClassificationType {
        ClassificationType::new("Sensitive", "g-1")
            .with_attribute(AttributeDef::new("level", "int"))
            .with_attribute(AttributeDef::new("owner", "string"))
    }

    #[test]
    fn duplicate_is_case_insensitive() {
        let parent = sensitive();
        let err = validate_new_classification(
            "PII",
            &[AttributeDef::new("Level", "string")],
            &[&parent],
        )
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::DuplicateAttributes {
                duplicates: vec!["Level".to_string()],
                total: 1,
            }
        );
        assert_eq!(err.to_string(), "Attribute Level is duplicate !");
    }

    #[test]
    fn attributes_from_every_super_type_are_checked() {
        let a = sensitive();
        let b = ClassificationType::new("Audited", "g-2")
            .with_attribute(AttributeDef::new("reviewer", "string"));
        let err = validate_new_classification(
            "PII",
            &[
                AttributeDef::new("OWNER", "string"),
                AttributeDef::new("reviewer", "string"),
                AttributeDef::new("region", "string"),
            ],
            &[&a, &b],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Attributes: OWNER,reviewer are duplicate !");
    }

    #[test]
    fn all_duplicates_use_summary_message() {
        let parent = sensitive();
        let err = validate_new_classification(
            "PII",
            &[
                AttributeDef::new("level", "int"),
                AttributeDef::new("owner", "string"),
            ],
            &[&parent],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "All attributes are duplicate !");
    }

    #[test]
    fn empty_name_rejected_first() {
        assert_eq!(
            validate_new_classification("   ", &[], &[]),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn blank_attribute_rows_rejected() {
        let attrs = vec![
            AttributeDef::new("level", "int"),
            AttributeDef::new("", "string"),
        ];
        assert_eq!(
            validate_new_classification("PII", &attrs, &[]),
            Err(ValidationError::IncompleteAttributes)
        );
    }

    #[test]
    fn single_blank_row_means_no_attributes() {
        let attrs = normalize_attributes(vec![AttributeDef::new("", "string")]);
        assert!(attrs.is_empty());
        assert!(validate_new_classification("PII", &attrs, &[]).is_ok());
    }

    #[test]
    fn no_super_types_never_duplicate() {
        let attrs = vec![AttributeDef::new("level", "int")];
        assert!(validate_new_classification("PII", &attrs, &[]).is_ok());
    }
}
