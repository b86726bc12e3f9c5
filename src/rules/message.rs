//! Violation message rendering
//!
//! Templates support exactly two placeholders, `{{resource}}` and
//! `{{field}}`. Substituted values are wrapped in backticks.

use regex::Regex;

use crate::error::Result;

/// Base URL for rule documentation
pub const DEFAULT_DOCS_BASE_URL: &str = "https://familiar.dev/docs/breaking-changes";

pub const RESOURCE_PLACEHOLDER: &str = "{{resource}}";
pub const FIELD_PLACEHOLDER: &str = "{{field}}";

/// Placeholder names a template may reference
pub const SUPPORTED_PLACEHOLDERS: [&str; 2] = ["resource", "field"];

/// Documentation page of a rule for a given version
pub fn documentation_url(base_url: &str, version: &str, identifier: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), version, identifier)
}

/// Build the documentation reference appended to every message
pub fn documentation_reference(base_url: &str, version: &str, identifier: &str) -> String {
    format!(" See: {}", documentation_url(base_url, version, identifier))
}

/// Render a complete user-facing violation message
///
/// Placeholders are substituted in a single pass, so a resource or field
/// name that itself contains `{{field}}` is left as written.
pub fn render_message(
    base_url: &str,
    template: &str,
    identifier: &str,
    version: &str,
    resource: &str,
    field: &str,
) -> String {
    let mut msg = String::with_capacity(template.len() + resource.len() + field.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        msg.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(RESOURCE_PLACEHOLDER) {
            msg.push_str(&format!("`{}`", resource));
            rest = after;
        } else if let Some(after) = tail.strip_prefix(FIELD_PLACEHOLDER) {
            msg.push_str(&format!("`{}`", field));
            rest = after;
        } else {
            msg.push_str("{{");
            rest = &tail[2..];
        }
    }
    msg.push_str(rest);

    msg + &documentation_reference(base_url, version, identifier)
}

/// Names of all `{{...}}` placeholders in a template, in order of appearance
pub fn placeholders(template: &str) -> Result<Vec<String>> {
    let re = Regex::new(r"\{\{([^{}]*)\}\}")?;
    Ok(re
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_both_placeholders() {
        let msg = render_message(
            "https://docs.example.com",
            "Field {{field}} within resource {{resource}} was removed",
            "some-rule",
            "v5",
            "compute_instance",
            "zone",
        );
        assert_eq!(
            msg,
            "Field `zone` within resource `compute_instance` was removed See: https://docs.example.com/v5/some-rule"
        );
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let msg = render_message(
            "https://docs.example.com",
            "Field {{field}} within resource {{resource}} was removed",
            "some-rule",
            "v5",
            "odd_{{field}}_name",
            "zone",
        );
        assert_eq!(
            msg,
            "Field `zone` within resource `odd_{{field}}_name` was removed See: https://docs.example.com/v5/some-rule"
        );

        let msg = render_message("https://d", "{{field}}/{{resource}}", "r", "v", "res", "{{resource}}");
        assert_eq!(msg, "`{{resource}}`/`res` See: https://d/v/r");
    }

    #[test]
    fn test_unknown_braces_kept_verbatim() {
        let msg = render_message("https://d", "a {{ b {{field}} }}", "r", "v", "res", "f");
        assert_eq!(msg, "a {{ b `f` }} See: https://d/v/r");
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let reference = documentation_reference("https://docs.example.com/", "4.0.0", "resource-id");
        assert_eq!(reference, " See: https://docs.example.com/4.0.0/resource-id");
    }

    #[test]
    fn test_placeholders() {
        let found = placeholders("{{field}} in {{resource}} and {{ other }}").unwrap();
        assert_eq!(found, vec!["field", "resource", " other "]);
        assert!(placeholders("no placeholders").unwrap().is_empty());
    }
}
