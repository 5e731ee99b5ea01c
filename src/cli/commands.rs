use crate::environment::Environment;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Deterministic planner for front-end asset bundling
#[derive(Parser, Debug)]
#[command(
    name = "packplan",
    about = "Deterministic planner for front-end asset bundling",
    version,
    author,
    long_about = "packplan discovers the entry points of a front-end project, derives a stable \
                  bundle name for each one and assembles the ordered processing rules an \
                  external bundler needs for a development or production build."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Increase verbosity (can be used multiple times)"
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Build the full bundling plan",
        long_about = "Discovers entry points, builds the entry map and assembles the rule set \
                      for the selected environment.\n\n\
                      Examples:\n  \
                      packplan plan\n  \
                      packplan plan /path/to/project --env production\n  \
                      packplan plan --format json -o plan.json"
    )]
    Plan(PlanArgs),

    #[command(
        about = "List discovered entry points",
        long_about = "Prints the bundle name to source path mapping without assembling rules.\n\n\
                      Examples:\n  \
                      packplan entries\n  \
                      packplan entries --format yaml"
    )]
    Entries(EntriesArgs),

    #[command(
        about = "Show which rule a file is routed to",
        long_about = "Assembles the plan and reports the first rule whose predicate accepts \
                      the given path.\n\n\
                      Examples:\n  \
                      packplan match app/javascript/styles/app.module.scss\n  \
                      packplan match app/javascript/packs/application.js --env production"
    )]
    Match(MatchArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project root (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'e',
        long,
        value_parser = parse_environment,
        help = "Build environment (development or production); overrides PACKPLAN_ENV and NODE_ENV"
    )]
    pub env: Option<Environment>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct EntriesArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project root (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    #[arg(value_name = "FILE", help = "File path to route")]
    pub file: PathBuf,

    #[arg(
        short = 'p',
        long = "project",
        value_name = "PATH",
        help = "Path to project root (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'e',
        long,
        value_parser = parse_environment,
        help = "Build environment (development or production)"
    )]
    pub env: Option<Environment>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_environment(s: &str) -> Result<Environment, String> {
    s.parse::<Environment>()
}
