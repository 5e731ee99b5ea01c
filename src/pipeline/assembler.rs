use super::naming::OutputNaming;
use super::plan::{ManifestOptions, PipelinePlan, ResolveOptions, DEVTOOL};
use crate::entries::EntryMap;
use crate::environment::Environment;
use crate::error::{PlanError, PlanResult};
use crate::rules::{
    default_style_rules, AssetRule, ComponentRule, Rule, ScriptRule, StyleOptions,
};
use std::path::PathBuf;
use tracing::debug;

/// Composes an entry map and the fixed rule set into a [`PipelinePlan`]
///
/// Rule order in the produced plan is fixed: static assets, application scripts,
/// dependency scripts, unscoped CSS, scoped CSS, scoped SCSS/SASS, then component rules
/// in the order they were registered.
#[derive(Debug, Clone)]
pub struct PipelineAssembler {
    source_root: PathBuf,
    cache_dir: PathBuf,
    output: OutputNaming,
    hot_reload: bool,
    components: Vec<ComponentRule>,
}

impl Default for PipelineAssembler {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("app/javascript"),
            cache_dir: PathBuf::from("tmp/cache/packplan"),
            output: OutputNaming::default(),
            hot_reload: false,
            components: vec![ComponentRule::vue()],
        }
    }
}

impl PipelineAssembler {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            ..Default::default()
        }
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    pub fn with_output(mut self, output: OutputNaming) -> Self {
        self.output = output;
        self
    }

    pub fn with_hot_reload(mut self, hot_reload: bool) -> Self {
        self.hot_reload = hot_reload;
        self
    }

    /// Replaces the externally owned component rules
    pub fn with_components(mut self, components: Vec<ComponentRule>) -> Self {
        self.components = components;
        self
    }

    /// Builds the plan. An empty entry map is rejected: a build with nothing to compile
    /// is treated as a misconfigured source root.
    pub fn assemble(&self, entry: EntryMap, environment: Environment) -> PlanResult<PipelinePlan> {
        if entry.is_empty() {
            return Err(PlanError::configuration(format!(
                "no entry points found under {}",
                self.source_root.display()
            )));
        }

        let style_options = StyleOptions {
            postcss_config: self.source_root.clone(),
            hot_reload: self.hot_reload,
        };

        let mut rules = vec![
            Rule::Asset(AssetRule::new(&self.source_root)),
            Rule::Script(ScriptRule::application(
                &self.source_root,
                &self.cache_dir,
                environment,
            )),
            Rule::Script(ScriptRule::dependencies(&self.cache_dir, environment)),
        ];
        rules.extend(
            default_style_rules(environment, &style_options)
                .into_iter()
                .map(Rule::Style),
        );
        rules.extend(self.components.iter().cloned().map(Rule::Component));

        debug!(
            environment = %environment,
            entries = entry.len(),
            rules = rules.len(),
            "Pipeline plan assembled"
        );

        Ok(PipelinePlan {
            environment,
            devtool: DEVTOOL.to_string(),
            entry,
            rules,
            output: self.output.clone(),
            resolve: ResolveOptions::new(&self.source_root),
            manifest: ManifestOptions::default(),
        })
    }
}
