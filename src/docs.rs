//! Rule catalog documentation
//!
//! Renders every known rule as Markdown, including rules that have no
//! automated check so reviewers know what to look for by hand.

use crate::rules::{documentation_url, Rule, RuleRegistry};

/// Render all registries as a single Markdown document
pub fn render_rule_catalog<A: Rule, B: Rule>(
    schema: &RuleRegistry<A>,
    inventory: &RuleRegistry<B>,
    base_url: &str,
    version: &str,
) -> String {
    let mut out = String::from("# Breaking Changes\n\n");
    out.push_str("Changes listed here break existing configurations, state files or import workflows.\n");
    render_section(&mut out, "Resource inventory", inventory, base_url, version);
    render_section(&mut out, "Resource schema", schema, base_url, version);
    out
}

fn render_section<R: Rule>(
    out: &mut String,
    title: &str,
    registry: &RuleRegistry<R>,
    base_url: &str,
    version: &str,
) {
    out.push_str(&format!("\n## {}\n\n", title));
    for rule in registry {
        let detection = if rule.undetectable() {
            "manual review required"
        } else {
            "automated"
        };
        out.push_str(&format!("### {}\n\n", rule.name()));
        out.push_str(&format!("- Identifier: `{}`\n", rule.identifier()));
        out.push_str(&format!(
            "- Reference: {}\n",
            documentation_url(base_url, version, rule.identifier())
        ));
        out.push_str(&format!("- Detection: {}\n", detection));
        out.push_str(&format!("\n{}\n\n", rule.definition()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{resource_inventory_rules, resource_schema_rules};

    #[test]
    fn test_catalog_lists_every_rule() {
        let schema = resource_schema_rules().unwrap();
        let inventory = resource_inventory_rules().unwrap();
        let doc = render_rule_catalog(&schema, &inventory, "https://docs.example.com", "v5");

        for id in schema.identifiers().into_iter().chain(inventory.identifiers()) {
            assert!(doc.contains(&format!("`{}`", id)), "missing {}", id);
            assert!(doc.contains(&format!("https://docs.example.com/v5/{}", id)));
        }
        assert_eq!(doc.matches("manual review required").count(), 2);
        assert_eq!(doc.matches("Detection: automated").count(), 2);
    }

    #[test]
    fn test_rule_entry_layout() {
        let doc = render_rule_catalog(
            &resource_schema_rules().unwrap(),
            &resource_inventory_rules().unwrap(),
            "https://docs.example.com",
            "v5",
        );
        let expected = "### Changing resource ID format\n\n\
                        - Identifier: `resource-id`\n\
                        - Reference: https://docs.example.com/v5/resource-id\n\
                        - Detection: manual review required\n\n";
        assert!(doc.contains(expected), "{}", doc);
    }

    #[test]
    fn test_inventory_section_first() {
        let doc = render_rule_catalog(
            &resource_schema_rules().unwrap(),
            &resource_inventory_rules().unwrap(),
            "https://docs.example.com",
            "v5",
        );
        let inventory = doc.find("## Resource inventory").unwrap();
        let schema = doc.find("## Resource schema").unwrap();
        assert!(inventory < schema);
    }
}
