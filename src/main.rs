use packplan::cli::commands::{CliArgs, Commands};
use packplan::cli::handlers::{handle_entries, handle_match, handle_plan};
use packplan::util::logging::{init_logging, LoggingConfig};
use packplan::{PackplanConfig, VERSION};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();

    let logging = LoggingConfig::from_config(&PackplanConfig::default()).with_overrides(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    );
    init_logging(logging);

    debug!("packplan v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Plan(plan_args) => handle_plan(plan_args, args.quiet),
        Commands::Entries(entries_args) => handle_entries(entries_args),
        Commands::Match(match_args) => handle_match(match_args, args.quiet),
    };

    std::process::exit(exit_code);
}
