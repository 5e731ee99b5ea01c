//! Output formatting for plans, entry maps and rule matches
//!
//! JSON and YAML render the serde form of the value unchanged; the human format is a
//! condensed tree meant for terminals.
//!
//! # Example
//!
//! ```no_run
//! use packplan::cli::output::{OutputFormat, OutputFormatter};
//! use packplan::{PackplanConfig, PlanOrchestrator};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let plan = PlanOrchestrator::new(None).plan(Path::new("."), &PackplanConfig::default())?;
//! let formatter = OutputFormatter::new(OutputFormat::Json);
//! println!("{}", formatter.format_plan(&plan)?);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::entries::EntryMap;
use crate::environment::Environment;
use crate::pipeline::PipelinePlan;
use crate::rules::Rule;

const RULE_LINE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Where a single file is routed by a plan
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport<'a> {
    pub file: PathBuf,
    pub environment: Environment,
    pub rule: Option<&'a Rule>,
    pub loaders: Vec<String>,
}

impl<'a> RouteReport<'a> {
    pub fn new(plan: &'a PipelinePlan, file: &Path) -> Self {
        let rule = plan.rule_for(file);
        Self {
            file: file.to_path_buf(),
            environment: plan.environment,
            rule,
            loaders: rule.map(Rule::loaders).unwrap_or_default(),
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_plan(&self, plan: &PipelinePlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(plan).context("Failed to serialize plan to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(plan).context("Failed to serialize plan to YAML")
            }
            OutputFormat::Human => self.format_plan_human(plan),
        }
    }

    pub fn format_entries(&self, entries: &EntryMap) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(entries)
                .context("Failed to serialize entries to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(entries).context("Failed to serialize entries to YAML")
            }
            OutputFormat::Human => Ok(self.format_entries_human(entries)),
        }
    }

    pub fn format_match(&self, report: &RouteReport<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize match to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize match to YAML")
            }
            OutputFormat::Human => Ok(self.format_match_human(report)),
        }
    }

    fn format_plan_human(&self, plan: &PipelinePlan) -> Result<String> {
        let fingerprint = plan
            .fingerprint()
            .context("Failed to compute plan fingerprint")?;

        let mut output = String::new();
        output.push_str("\u{2713} Bundling Plan\n");
        output.push_str(RULE_LINE);
        output.push_str("\n\n");

        output.push_str(&format!("Environment:  {}\n", plan.environment));
        output.push_str(&format!("Devtool:      {}\n", plan.devtool));
        output.push_str(&format!("Output:       {}\n", plan.output.path.display()));
        output.push_str(&format!("Public path:  {}\n", plan.output.public_path));
        output.push_str(&format!("Fingerprint:  {}\n\n", fingerprint));

        output.push_str(&self.format_entries_human(&plan.entry));
        output.push('\n');

        output.push_str(&format!("Rules ({}):\n", plan.rules.len()));
        for (i, rule) in plan.rules.iter().enumerate() {
            let is_last = i == plan.rules.len() - 1;
            let connector = if is_last { "\u{2514}" } else { "\u{251C}" };
            output.push_str(&format!(
                "{}\u{2500} {}. {}\n",
                connector,
                i + 1,
                rule.label()
            ));
            output.push_str(&format!(
                "{}     {}\n",
                if is_last { " " } else { "\u{2502}" },
                rule.loaders().join(" > ")
            ));
        }

        Ok(output)
    }

    fn format_entries_human(&self, entries: &EntryMap) -> String {
        let mut output = format!("Entries ({}):\n", entries.len());
        let width = entries.names().map(|n| n.as_str().len()).max().unwrap_or(0);

        for (i, (name, source)) in entries.iter().enumerate() {
            let connector = if i == entries.len() - 1 {
                "\u{2514}"
            } else {
                "\u{251C}"
            };
            output.push_str(&format!(
                "{}\u{2500} {:<width$}  {}\n",
                connector,
                name.as_str(),
                source.display(),
                width = width
            ));
        }

        output
    }

    fn format_match_human(&self, report: &RouteReport<'_>) -> String {
        match report.rule {
            Some(rule) => format!(
                "{} ({})\n\u{251C}\u{2500} Rule:     {}\n\u{2514}\u{2500} Loaders:  {}\n",
                report.file.display(),
                report.environment,
                rule.label(),
                report.loaders.join(" > ")
            ),
            None => format!(
                "\u{26A0} {} ({}) is not matched by any rule\n",
                report.file.display(),
                report.environment
            ),
        }
    }
}
