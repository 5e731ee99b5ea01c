//! Stylesheet rule generation
//!
//! A style rule is a loader chain for one class of stylesheets. The chain always starts
//! with an environment-dependent head (extract to a file in production, inline injection
//! in development), followed by module resolution, post-processing and any caller
//! supplied preprocessors, in that order.

use super::pattern::{Condition, MatchPredicate, Pattern};
use crate::environment::Environment;
use serde::Serialize;
use std::path::PathBuf;

pub const CSS_PATTERN: &str = r"(?i)\.(css)$";
pub const SASS_PATTERN: &str = r"(?i)\.(scss|sass)$";

/// Class names of scoped stylesheets are rewritten with this template
pub const LOCAL_IDENT_NAME: &str = "[name]__[local]___[hash:base64:5]";

/// Number of processors that run after module resolution for `@import`ed files
const IMPORT_LOADERS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Emit a separate, cacheable stylesheet artifact
    ExtractToFile,
    /// Inject styles at runtime so they can be swapped without a page reload
    InjectInline,
}

impl OutputMode {
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => OutputMode::ExtractToFile,
            Environment::Development => OutputMode::InjectInline,
        }
    }
}

/// First loader of a style chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeadLoader {
    ExtractToFile,
    InjectInline { hot_reload: bool, source_map: bool },
}

impl HeadLoader {
    pub fn mode(&self) -> OutputMode {
        match self {
            HeadLoader::ExtractToFile => OutputMode::ExtractToFile,
            HeadLoader::InjectInline { .. } => OutputMode::InjectInline,
        }
    }

    pub fn loader(&self) -> &'static str {
        match self {
            HeadLoader::ExtractToFile => "mini-css-extract-plugin",
            HeadLoader::InjectInline { .. } => "style-loader",
        }
    }
}

/// A processing step after the head loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Processor {
    ModuleResolution {
        modules: bool,
        import_loaders: u8,
        local_ident_name: String,
        source_map: bool,
    },
    PostProcess {
        config_path: PathBuf,
        source_map: bool,
    },
    Sass {
        source_map: bool,
    },
}

impl Processor {
    pub fn sass() -> Self {
        Processor::Sass { source_map: true }
    }

    pub fn loader(&self) -> &'static str {
        match self {
            Processor::ModuleResolution { .. } => "css-loader",
            Processor::PostProcess { .. } => "postcss-loader",
            Processor::Sass { .. } => "sass-loader",
        }
    }
}

/// Environment-invariant inputs shared by every style rule of one plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    /// Directory holding the post-processor configuration
    pub postcss_config: PathBuf,
    /// Only honoured by the inline head
    pub hot_reload: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            postcss_config: PathBuf::from("app/javascript"),
            hot_reload: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRule {
    pub predicate: MatchPredicate,
    pub scoped: bool,
    pub head: HeadLoader,
    /// Module resolution, post-processing, then preprocessors
    pub chain: Vec<Processor>,
    /// Scoped stylesheets can be dropped when unused; global ones never can
    pub side_effect_free: bool,
}

impl StyleRule {
    pub fn mode(&self) -> OutputMode {
        self.head.mode()
    }

    pub fn preprocessor_steps(&self) -> &[Processor] {
        self.chain.get(2..).unwrap_or(&[])
    }

    /// Loader identifiers in execution order, head first
    pub fn loaders(&self) -> Vec<&'static str> {
        std::iter::once(self.head.loader())
            .chain(self.chain.iter().map(Processor::loader))
            .collect()
    }
}

/// Builds the rule for stylesheets matching `test`.
///
/// Scoped rules only match files carrying the module marker; unscoped rules match
/// everything else, so a scoped/unscoped pair over one pattern never overlaps.
pub fn make_style_rule(
    test: Pattern,
    scoped: bool,
    preprocessors: Vec<Processor>,
    environment: Environment,
    options: &StyleOptions,
) -> StyleRule {
    let marker = Condition::Regex(Pattern::module_marker());
    let predicate = if scoped {
        MatchPredicate::new(test).including(marker)
    } else {
        MatchPredicate::new(test).excluding(marker)
    };

    let head = match OutputMode::for_environment(environment) {
        OutputMode::ExtractToFile => HeadLoader::ExtractToFile,
        OutputMode::InjectInline => HeadLoader::InjectInline {
            hot_reload: options.hot_reload,
            source_map: true,
        },
    };

    let mut chain = vec![
        Processor::ModuleResolution {
            modules: scoped,
            import_loaders: IMPORT_LOADERS,
            local_ident_name: LOCAL_IDENT_NAME.to_string(),
            source_map: true,
        },
        Processor::PostProcess {
            config_path: options.postcss_config.clone(),
            source_map: true,
        },
    ];
    chain.extend(preprocessors);

    StyleRule {
        predicate,
        scoped,
        head,
        chain,
        side_effect_free: scoped,
    }
}

/// The fixed stylesheet rules of every plan: unscoped CSS, scoped CSS, scoped SCSS/SASS
pub fn default_style_rules(environment: Environment, options: &StyleOptions) -> Vec<StyleRule> {
    vec![
        make_style_rule(Pattern::fixed(CSS_PATTERN), false, Vec::new(), environment, options),
        make_style_rule(Pattern::fixed(CSS_PATTERN), true, Vec::new(), environment, options),
        make_style_rule(
            Pattern::fixed(SASS_PATTERN),
            true,
            vec![Processor::sass()],
            environment,
            options,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn css() -> Pattern {
        Pattern::fixed(CSS_PATTERN)
    }

    fn rule(scoped: bool, environment: Environment) -> StyleRule {
        make_style_rule(css(), scoped, Vec::new(), environment, &StyleOptions::default())
    }

    #[test]
    fn test_head_follows_environment() {
        assert_eq!(
            rule(false, Environment::Production).mode(),
            OutputMode::ExtractToFile
        );
        assert_eq!(
            rule(false, Environment::Development).mode(),
            OutputMode::InjectInline
        );
    }

    #[test]
    fn test_other_fields_are_environment_invariant() {
        for scoped in [false, true] {
            let prod = rule(scoped, Environment::Production);
            let dev = rule(scoped, Environment::Development);
            assert_eq!(prod.predicate, dev.predicate);
            assert_eq!(prod.scoped, dev.scoped);
            assert_eq!(prod.chain, dev.chain);
            assert_eq!(prod.side_effect_free, dev.side_effect_free);
        }
    }

    #[test]
    fn test_chain_order() {
        let rule = make_style_rule(
            Pattern::fixed(SASS_PATTERN),
            true,
            vec![Processor::sass()],
            Environment::Development,
            &StyleOptions::default(),
        );
        assert_eq!(
            rule.loaders(),
            vec!["style-loader", "css-loader", "postcss-loader", "sass-loader"]
        );
        assert_eq!(rule.preprocessor_steps(), &[Processor::sass()]);
    }

    #[test]
    fn test_production_head_is_extraction() {
        let rule = rule(true, Environment::Production);
        assert_eq!(rule.loaders()[0], "mini-css-extract-plugin");
        assert!(rule.preprocessor_steps().is_empty());
    }

    #[test]
    fn test_side_effect_free_equals_scoped() {
        assert!(rule(true, Environment::Production).side_effect_free);
        assert!(!rule(false, Environment::Production).side_effect_free);
    }

    #[test]
    fn test_modules_flag_follows_scope() {
        let scoped = rule(true, Environment::Development);
        assert!(matches!(
            scoped.chain[0],
            Processor::ModuleResolution { modules: true, .. }
        ));
        let global = rule(false, Environment::Development);
        assert!(matches!(
            global.chain[0],
            Processor::ModuleResolution { modules: false, .. }
        ));
    }

    #[test]
    fn test_scoped_and_unscoped_partition_css() {
        let scoped = rule(true, Environment::Development);
        let global = rule(false, Environment::Development);

        for file in [
            "app.css",
            "app.module.css",
            "nested/theme.CSS",
            "nested/button.module.css",
            "module.css",
        ] {
            let path = Path::new(file);
            assert!(
                scoped.predicate.matches(path) ^ global.predicate.matches(path),
                "{} must match exactly one rule",
                file
            );
        }
        assert!(scoped.predicate.matches(Path::new("button.module.css")));
        assert!(global.predicate.matches(Path::new("button.css")));
    }

    #[test]
    fn test_hot_reload_only_in_inline_head() {
        let options = StyleOptions {
            hot_reload: true,
            ..Default::default()
        };
        let dev = make_style_rule(css(), false, Vec::new(), Environment::Development, &options);
        assert_eq!(
            dev.head,
            HeadLoader::InjectInline {
                hot_reload: true,
                source_map: true
            }
        );
        let prod = make_style_rule(css(), false, Vec::new(), Environment::Production, &options);
        assert_eq!(prod.head, HeadLoader::ExtractToFile);
    }

    #[test]
    fn test_default_style_rules_order() {
        let rules = default_style_rules(Environment::Production, &StyleOptions::default());
        assert_eq!(rules.len(), 3);
        assert!(!rules[0].scoped);
        assert!(rules[1].scoped);
        assert!(rules[2].scoped);
        assert_eq!(rules[2].predicate.test.as_str(), SASS_PATTERN);
        assert_eq!(rules[2].preprocessor_steps(), &[Processor::sass()]);
    }
}
