//! Breaking Change Detector
//!
//! A rule engine that compares two versions of a provider resource schema and
//! reports the changes that would break existing configurations, state files
//! or import workflows.
//!
//! ## Features
//!
//! - **Rule Catalog**: Each breaking pattern is an independent [`Rule`] value
//! - **Manual Review Rules**: Rules without an automated check stay in the catalog
//! - **Stable Identifiers**: Every message links to `<docs-url>/<version>/<identifier>`
//! - **Deterministic Reports**: Registry order, then sorted field order
//!
//! ## Flow
//!
//! ```text
//! loader ──► old/new SchemaSnapshot ──► Detector ──► RuleRegistry ──► Rule::is_rule_break
//!                                           │
//!                                           └──► Violation { rule, resource, field, message }
//! ```

pub mod config;
pub mod detector;
pub mod docs;
pub mod error;
pub mod loader;
pub mod rules;
pub mod schema;

pub use config::{DetectorConfig, OutputFormat};
pub use detector::{Detector, Report, Violation};
pub use docs::render_rule_catalog;
pub use error::{DetectorError, Result};
pub use rules::{
    resource_inventory_rules, resource_schema_rules, ResourceInventoryRule, ResourceSchemaRule, Rule,
    RuleRegistry,
};
pub use schema::{FieldDescriptor, FieldType, ProviderSchema, SchemaSnapshot};
