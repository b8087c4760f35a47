//! Priority-ordered pattern rules.
//!
//! A [`RuleSet`] holds compiled, case-insensitive patterns together with a
//! response template and a priority. Rules are always kept sorted by
//! descending priority; rules with equal priority keep the order in which
//! they were added.

pub mod template;

pub use template::render_template;

use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;

/// A compiled pattern, its response template and its priority.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    template: String,
    priority: i32,
}

impl Rule {
    /// Compile a case-insensitive rule.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error when `pattern` is invalid.
    pub fn new(pattern: &str, template: impl Into<String>, priority: i32) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            pattern,
            template: template.into(),
            priority,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Whether the pattern matches anywhere within `message`.
    pub fn is_match(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }

    /// Render this rule's response for `message`, or `None` if it does not match.
    pub fn respond(&self, message: &str) -> Option<String> {
        self.pattern
            .captures(message)
            .map(|captures| render_template(&self.template, &captures))
    }
}

/// Rules ordered by descending priority.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, keeping the set ordered by descending priority.
    pub fn add(&mut self, rule: Rule) {
        self.rules.push(rule);
        // sort_by_key is stable: equal priorities keep insertion order.
        self.rules.sort_by_key(|rule| Reverse(rule.priority));
    }

    /// The highest-priority rule whose pattern matches `message`.
    pub fn find_match(&self, message: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.is_match(message))
    }

    /// Render the response of the first matching rule.
    pub fn respond(&self, message: &str) -> Option<String> {
        self.find_match(message).and_then(|rule| rule.respond(message))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
