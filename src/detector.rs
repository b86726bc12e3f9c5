//! Breaking change detection
//!
//! The [`Detector`] runs a [`RuleRegistry`] against an old/new pair and turns
//! every offending name into a rendered [`Violation`]. Reports follow registry
//! order, then sorted field order.
//!
//! Rule checks are not guarded: a panic inside a check is a bug in that rule
//! and propagates to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::{render_message, ResourceInventoryRule, ResourceSchemaRule, Rule, RuleRegistry, DEFAULT_DOCS_BASE_URL};
use crate::schema::ProviderSchema;

/// One (rule, resource, field) finding with its rendered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the violated rule
    pub rule: String,
    pub resource: String,
    /// Offending field; empty for resource-level rules
    pub field: String,
    pub message: String,
}

/// Result of comparing two provider versions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Version used for documentation links
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn new(version: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            version: version.into(),
            generated_at: Utc::now(),
            violations,
        }
    }

    /// Rendered messages in report order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.message.as_str())
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Drives rule registries against snapshot pairs
#[derive(Debug, Clone)]
pub struct Detector {
    docs_base_url: String,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector {
    /// Create a detector linking to the default documentation site
    pub fn new() -> Self {
        Self {
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
        }
    }

    /// Link violations to a different documentation site
    pub fn with_docs_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.docs_base_url = base_url.into();
        self
    }

    pub fn docs_base_url(&self) -> &str {
        &self.docs_base_url
    }

    /// Run every rule of `registry` against `old` and `new`
    pub fn detect<R: Rule>(
        &self,
        registry: &RuleRegistry<R>,
        resource: &str,
        version: &str,
        old: &R::Subject,
        new: &R::Subject,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in registry {
            let mut fields = rule.is_rule_break(old, new);
            fields.sort_unstable();
            tracing::debug!(
                rule = rule.identifier(),
                resource,
                violations = fields.len(),
                "Rule evaluated"
            );

            violations.extend(fields.into_iter().map(|field| Violation {
                rule: rule.identifier().to_string(),
                resource: resource.to_string(),
                message: render_message(
                    &self.docs_base_url,
                    rule.template(),
                    rule.identifier(),
                    version,
                    resource,
                    &field,
                ),
                field,
            }));
        }

        violations
    }

    /// Compare two provider versions
    ///
    /// Inventory rules run first, with each violating resource name reported
    /// as the resource. Schema rules then run for every resource present in
    /// both versions, in sorted resource order.
    pub fn compare_providers(
        &self,
        inventory: &RuleRegistry<ResourceInventoryRule>,
        schema: &RuleRegistry<ResourceSchemaRule>,
        version: &str,
        old: &ProviderSchema,
        new: &ProviderSchema,
    ) -> Report {
        let mut violations = Vec::new();

        for rule in inventory {
            let mut resources = rule.is_rule_break(old, new);
            resources.sort_unstable();
            violations.extend(resources.into_iter().map(|resource| Violation {
                rule: rule.identifier().to_string(),
                message: render_message(
                    &self.docs_base_url,
                    rule.template(),
                    rule.identifier(),
                    version,
                    &resource,
                    "",
                ),
                resource,
                field: String::new(),
            }));
        }

        for name in old.resource_names() {
            if let (Some(old_schema), Some(new_schema)) = (old.resource(name), new.resource(name)) {
                violations.extend(self.detect(schema, name, version, old_schema, new_schema));
            }
        }

        tracing::info!(
            version,
            resources = old.len(),
            violations = violations.len(),
            "Provider comparison complete"
        );
        Report::new(version, violations)
    }
}
