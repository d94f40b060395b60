//! Template resolution: placeholders first, then replacement rules.

use drafter_pattern::{CompiledPattern, Pattern};

use crate::context::Context;
use crate::replace::{apply_rules, Replacer};
use crate::substitute::substitute;

/// Resolves `input` against `context`, then applies `rules` in order.
///
/// Never fails: unknown placeholders are left in place, unused keys are
/// ignored, and an empty rule list leaves the substituted text untouched.
///
/// # Example
///
/// ```
/// use drafter_template::{resolve, Context, Replacer};
///
/// let context = Context::new().with("$CHANGES", "* Fix JENKINS-42");
/// let rules = [Replacer::compile("/JENKINS-(\\d+)/g", "#$1").unwrap()];
///
/// let notes = resolve("## Changes\n$CHANGES", &context, &rules);
/// assert_eq!(notes, "## Changes\n* Fix #42");
/// ```
pub fn resolve<P: Pattern>(input: &str, context: &Context, rules: &[Replacer<P>]) -> String {
    tracing::debug!(
        keys = context.len(),
        rules = rules.len(),
        "resolving template"
    );
    apply_rules(substitute(input, context), rules)
}

/// Resolves placeholders only, without replacement rules.
///
/// ```
/// use drafter_template::{render, Context};
///
/// let context = Context::new().with("$MAJOR", 1).with("$MINOR", 0).with("$PATCH", 0);
/// assert_eq!(render("$MAJOR.$MINOR.$PATCH", &context), "1.0.0");
/// ```
pub fn render(input: &str, context: &Context) -> String {
    substitute(input, context)
}

/// A template source bundled with its replacement rules.
///
/// Useful when the same template renders against many contexts.
///
/// ```
/// use drafter_template::{Context, Replacer, Template};
///
/// let template = Template::new("Released $VERSION")
///     .with_rule(Replacer::compile("/Released/", "Shipped").unwrap());
///
/// let a = template.render(&Context::new().with("$VERSION", "1.0.0"));
/// let b = template.render(&Context::new().with("$VERSION", "1.1.0"));
/// assert_eq!(a, "Shipped 1.0.0");
/// assert_eq!(b, "Shipped 1.1.0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template<P = CompiledPattern> {
    source: String,
    rules: Vec<Replacer<P>>,
}

impl Template {
    /// Creates a template with no rules.
    pub fn new(source: impl Into<String>) -> Self {
        Template::with_pattern_rules(source, Vec::new())
    }
}

impl<P: Pattern> Template<P> {
    /// Creates a template with rules over any [`Pattern`] type.
    pub fn with_pattern_rules(source: impl Into<String>, rules: Vec<Replacer<P>>) -> Self {
        Template {
            source: source.into(),
            rules,
        }
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Replacer<P>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends several rules, keeping their order.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Replacer<P>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// The template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The rules, in application order.
    pub fn rules(&self) -> &[Replacer<P>] {
        &self.rules
    }

    /// Resolves the template against `context`.
    pub fn render(&self, context: &Context) -> String {
        resolve(&self.source, context, &self.rules)
    }
}
