//! Breaking change rules
//!
//! Every rule is a value implementing [`Rule`]. Rules of one category are
//! grouped in a [`RuleRegistry`], which is built once, validated, and then
//! handed to the [`Detector`](crate::detector::Detector).
//!
//! ## Categories
//! - **resource-schema**: compares the fields of one resource ([`SchemaSnapshot`](crate::schema::SchemaSnapshot))
//! - **resource-inventory**: compares the resources of a provider ([`ProviderSchema`](crate::schema::ProviderSchema))
//!
//! A rule without an automated check is *undetectable*. It stays in the
//! registry so the catalog lists it for manual review, and it never reports
//! a violation.

pub mod message;
pub mod resource_inventory;
pub mod resource_schema;
pub mod static_rule;

use std::collections::HashSet;

use regex::Regex;

use crate::error::{DetectorError, Result};

pub use message::{documentation_reference, documentation_url, render_message, DEFAULT_DOCS_BASE_URL};
pub use resource_inventory::{resource_inventory_rules, ResourceInventoryRule};
pub use resource_schema::{resource_schema_rules, ResourceSchemaRule};
pub use static_rule::StaticRule;

/// Capability contract shared by every rule
pub trait Rule {
    /// What the check inspects
    type Subject: ?Sized;

    /// Human readable name
    fn name(&self) -> &str;

    /// Why the change is breaking
    fn definition(&self) -> &str;

    /// Stable slug used in documentation links. Never changes once published.
    fn identifier(&self) -> &str;

    /// Message template with `{{resource}}` and `{{field}}` placeholders
    fn template(&self) -> &str;

    /// Names violating this rule for the given pair. Empty for undetectable rules.
    fn is_rule_break(&self, old: &Self::Subject, new: &Self::Subject) -> Vec<String>;

    /// True if there is no automated check for this rule
    fn undetectable(&self) -> bool;

    /// Render the violation message, with a documentation reference for `version`
    fn message(&self, version: &str, resource: &str, field: &str) -> String {
        render_message(
            DEFAULT_DOCS_BASE_URL,
            self.template(),
            self.identifier(),
            version,
            resource,
            field,
        )
    }
}

/// Ordered, immutable collection of rules of one category
#[derive(Debug, Clone)]
pub struct RuleRegistry<R> {
    category: String,
    rules: Vec<R>,
}

impl<R: Rule> RuleRegistry<R> {
    /// Build a registry, failing on duplicate or malformed identifiers and
    /// on templates that use unsupported placeholders
    pub fn new(category: impl Into<String>, rules: Vec<R>) -> Result<Self> {
        let category = category.into();
        let slug = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$")?;
        let mut seen = HashSet::new();

        for rule in &rules {
            let identifier = rule.identifier();
            if !slug.is_match(identifier) {
                return Err(DetectorError::InvalidIdentifier {
                    identifier: identifier.to_string(),
                });
            }
            if !seen.insert(identifier) {
                return Err(DetectorError::DuplicateIdentifier {
                    category,
                    identifier: identifier.to_string(),
                });
            }
            for placeholder in message::placeholders(rule.template())? {
                if !message::SUPPORTED_PLACEHOLDERS.contains(&placeholder.as_str()) {
                    return Err(DetectorError::UnsupportedPlaceholder {
                        identifier: identifier.to_string(),
                        placeholder,
                    });
                }
            }
        }

        tracing::debug!(category = %category, rules = rules.len(), "Rule registry built");
        Ok(Self { category, rules })
    }

    /// Category name (e.g. "resource-schema")
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Identifiers in registry order
    pub fn identifiers(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.identifier()).collect()
    }

    /// Look up a rule by identifier
    pub fn get(&self, identifier: &str) -> Option<&R> {
        self.rules.iter().find(|r| r.identifier() == identifier)
    }
}

impl<'a, R> IntoIterator for &'a RuleRegistry<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
