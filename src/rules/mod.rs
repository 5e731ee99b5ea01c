//! Processing rules routed to the external compilers

pub mod pattern;
pub mod script;
pub mod style;

pub use pattern::{Condition, MatchPredicate, Pattern, MODULE_MARKER};
pub use script::{AssetRule, ComponentRule, ScriptRule, TranspileOptions};
pub use style::{
    default_style_rules, make_style_rule, HeadLoader, OutputMode, Processor, StyleOptions,
    StyleRule,
};

use serde::Serialize;
use std::path::Path;

/// One entry of a plan's ordered rule list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    Asset(AssetRule),
    Script(ScriptRule),
    Style(StyleRule),
    Component(ComponentRule),
}

impl Rule {
    pub fn predicate(&self) -> &MatchPredicate {
        match self {
            Rule::Asset(rule) => &rule.predicate,
            Rule::Script(rule) => &rule.predicate,
            Rule::Style(rule) => &rule.predicate,
            Rule::Component(rule) => &rule.predicate,
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.predicate().matches(path)
    }

    /// Short human-readable description, e.g. `style (scoped)` or `component vue`
    pub fn label(&self) -> String {
        match self {
            Rule::Asset(_) => "asset".to_string(),
            Rule::Script(rule) => format!("script {}", rule.predicate.test),
            Rule::Style(rule) if rule.scoped => format!("style (scoped) {}", rule.predicate.test),
            Rule::Style(rule) => format!("style {}", rule.predicate.test),
            Rule::Component(rule) => format!("component {}", rule.name),
        }
    }

    /// Loader names in application order; style chains list their head first
    pub fn loaders(&self) -> Vec<String> {
        match self {
            Rule::Asset(rule) => vec![rule.loader.clone()],
            Rule::Script(rule) => vec![rule.loader.clone()],
            Rule::Style(rule) => rule.loaders().into_iter().map(String::from).collect(),
            Rule::Component(rule) => vec![rule.loader.clone()],
        }
    }

    pub fn as_style(&self) -> Option<&StyleRule> {
        match self {
            Rule::Style(rule) => Some(rule),
            _ => None,
        }
    }
}

impl From<StyleRule> for Rule {
    fn from(rule: StyleRule) -> Self {
        Rule::Style(rule)
    }
}
