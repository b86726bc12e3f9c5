//! Rules over the set of resources a provider exposes

use crate::error::Result;
use crate::schema::ProviderSchema;

use super::static_rule::StaticRule;
use super::RuleRegistry;

/// A rule about resources being added to or taken out of a provider
pub type ResourceInventoryRule = StaticRule<ProviderSchema>;

pub const RESOURCE_REMOVAL_OR_RENAME: ResourceInventoryRule = ResourceInventoryRule {
    name: "Removing or renaming a resource",
    definition: "Resources should be retained whenever possible. Removing a resource breaks every configuration and \
                 state file that references it. Renaming a resource is equivalent to removing it.",
    message: "Resource {{resource}} was either removed or renamed",
    identifier: "resource-map-resource-removal-or-rename",
    is_rule_break: Some(removed_resources),
};

/// All resource inventory rules, in report order
pub fn resource_inventory_rules() -> Result<RuleRegistry<ResourceInventoryRule>> {
    RuleRegistry::new("resource-inventory", vec![RESOURCE_REMOVAL_OR_RENAME])
}

fn removed_resources(old: &ProviderSchema, new: &ProviderSchema) -> Vec<String> {
    old.resource_names()
        .into_iter()
        .filter(|name| !new.contains(name))
        .map(str::to_string)
        .collect()
}
