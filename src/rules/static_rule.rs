//! Rules defined as static data

use std::fmt;

use super::Rule;

/// Check function comparing an old and a new subject
pub type Check<S> = fn(old: &S, new: &S) -> Vec<String>;

/// A rule built from static strings and an optional check function
///
/// `S` is what the check compares, e.g. the fields of one resource or the
/// resources of a provider.
pub struct StaticRule<S> {
    pub name: &'static str,
    pub definition: &'static str,
    pub message: &'static str,
    pub identifier: &'static str,
    /// `None` for rules that need manual review
    pub is_rule_break: Option<Check<S>>,
}

// Manual impls: the derives would require `S: Clone`/`S: Copy`.
impl<S> Clone for StaticRule<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StaticRule<S> {}

impl<S> fmt::Debug for StaticRule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticRule")
            .field("identifier", &self.identifier)
            .field("name", &self.name)
            .field("undetectable", &self.is_rule_break.is_none())
            .finish()
    }
}

impl<S> Rule for StaticRule<S> {
    type Subject = S;

    fn name(&self) -> &str {
        self.name
    }

    fn definition(&self) -> &str {
        self.definition
    }

    fn identifier(&self) -> &str {
        self.identifier
    }

    fn template(&self) -> &str {
        self.message
    }

    fn is_rule_break(&self, old: &S, new: &S) -> Vec<String> {
        match self.is_rule_break {
            Some(check) => check(old, new),
            None => Vec::new(),
        }
    }

    fn undetectable(&self) -> bool {
        self.is_rule_break.is_none()
    }
}
