//! Rules over the fields of a single resource

use crate::error::Result;
use crate::schema::SchemaSnapshot;

use super::static_rule::StaticRule;
use super::RuleRegistry;

/// A rule about resource attribute changes
pub type ResourceSchemaRule = StaticRule<SchemaSnapshot>;

pub const FIELD_REMOVAL_OR_RENAME: ResourceSchemaRule = ResourceSchemaRule {
    name: "Removing or renaming a field",
    definition: "Fields should be retained whenever possible. Removing a field breaks every configuration that depends on it. \
                 Renaming and removing a field are equivalent in terms of configuration breakage.",
    message: "Field {{field}} within resource {{resource}} was either removed or renamed",
    identifier: "resource-schema-field-removal-or-rename",
    is_rule_break: Some(removed_fields),
};

pub const RESOURCE_ID_FORMAT: ResourceSchemaRule = ResourceSchemaRule {
    name: "Changing resource ID format",
    definition: "The resource ID is used to read resource state from the API. Changing how the ID is built breaks parsing \
                 of IDs stored by existing deployments.",
    message: "",
    identifier: "resource-id",
    is_rule_break: None,
};

pub const IMPORT_ID_FORMAT: ResourceSchemaRule = ResourceSchemaRule {
    name: "Changing resource ID import format",
    definition: "Automation outside the provider may import resources using a certain ID format. Removing or changing \
                 an accepted format breaks that automation.",
    message: "",
    identifier: "resource-import-format",
    is_rule_break: None,
};

/// All resource schema rules, in report order
pub fn resource_schema_rules() -> Result<RuleRegistry<ResourceSchemaRule>> {
    RuleRegistry::new(
        "resource-schema",
        vec![FIELD_REMOVAL_OR_RENAME, RESOURCE_ID_FORMAT, IMPORT_ID_FORMAT],
    )
}

/// Keys of `old` missing from `new`
fn removed_fields(old: &SchemaSnapshot, new: &SchemaSnapshot) -> Vec<String> {
    old.iter()
        .filter(|(name, _)| !new.contains(name))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;
    use crate::schema::{FieldDescriptor, FieldType};
    use std::collections::HashSet;

    fn snapshot(fields: &[(&str, FieldType)]) -> SchemaSnapshot {
        fields
            .iter()
            .map(|(name, ty)| (*name, FieldDescriptor::new(*ty)))
            .collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_removed_field_reported() {
        let old = snapshot(&[("name", FieldType::String), ("size", FieldType::Int)]);
        let new = snapshot(&[("name", FieldType::String)]);
        assert_eq!(FIELD_REMOVAL_OR_RENAME.is_rule_break(&old, &new), vec!["size"]);
    }

    #[test]
    fn test_added_field_not_reported() {
        let old = snapshot(&[("a", FieldType::Int)]);
        let new = snapshot(&[("a", FieldType::Int), ("b", FieldType::Int)]);
        assert!(FIELD_REMOVAL_OR_RENAME.is_rule_break(&old, &new).is_empty());
    }

    #[test]
    fn test_self_comparison_is_clean() {
        let s = snapshot(&[("a", FieldType::Int), ("b", FieldType::List), ("c", FieldType::Block)]);
        assert!(FIELD_REMOVAL_OR_RENAME.is_rule_break(&s, &s).is_empty());
        assert!(FIELD_REMOVAL_OR_RENAME
            .is_rule_break(&SchemaSnapshot::new(), &s)
            .is_empty());
    }

    #[test]
    fn test_type_change_not_reported() {
        let old = snapshot(&[("port", FieldType::Int)]);
        let new = snapshot(&[("port", FieldType::String)]);
        assert!(FIELD_REMOVAL_OR_RENAME.is_rule_break(&old, &new).is_empty());
    }

    #[test]
    fn test_reports_exactly_missing_keys() {
        let old = snapshot(&[
            ("a", FieldType::Int),
            ("b", FieldType::Int),
            ("c", FieldType::Int),
            ("d", FieldType::Int),
        ]);
        let new = snapshot(&[("b", FieldType::Int), ("d", FieldType::Int), ("e", FieldType::Int)]);

        let reported = FIELD_REMOVAL_OR_RENAME.is_rule_break(&old, &new);
        let expected: HashSet<String> = ["a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(reported.len(), expected.len());
        assert_eq!(reported.into_iter().collect::<HashSet<_>>(), expected);

        // Rename looks the same as removal
        let renamed = snapshot(&[("b", FieldType::Int), ("c", FieldType::Int), ("d", FieldType::Int), ("alpha", FieldType::Int)]);
        assert_eq!(sorted(FIELD_REMOVAL_OR_RENAME.is_rule_break(&old, &renamed)), vec!["a"]);
    }

    #[test]
    fn test_undetectable_rules() {
        let old = snapshot(&[("name", FieldType::String)]);
        let new = SchemaSnapshot::new();

        for rule in [RESOURCE_ID_FORMAT, IMPORT_ID_FORMAT] {
            assert!(rule.undetectable(), "{}", rule.identifier);
            assert!(rule.is_rule_break(&old, &new).is_empty());
            assert!(rule.is_rule_break(&new, &old).is_empty());
        }
        assert!(!FIELD_REMOVAL_OR_RENAME.undetectable());
    }

    #[test]
    fn test_message_rendering() {
        let msg = FIELD_REMOVAL_OR_RENAME.message("6.0.0", "google_compute_instance", "zone");
        assert_eq!(msg.matches("`zone`").count(), 1);
        assert_eq!(msg.matches("`google_compute_instance`").count(), 1);
        assert!(!msg.contains("{{"));
        assert!(msg.ends_with("/6.0.0/resource-schema-field-removal-or-rename"));
    }

    #[test]
    fn test_registry_order() {
        let registry = resource_schema_rules().unwrap();
        assert_eq!(
            registry.identifiers(),
            vec!["resource-schema-field-removal-or-rename", "resource-id", "resource-import-format"]
        );
    }
}
