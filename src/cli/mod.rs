pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, EntriesArgs, MatchArgs, OutputFormatArg, PlanArgs};
pub use output::{OutputFormat, OutputFormatter, RouteReport};
