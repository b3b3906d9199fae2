mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    // stdout carries the transformed buffer, so logs go to stderr
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = RuntimeContext::from_global_args(&cli.global);

    let result = match &cli.command {
        Commands::Wrap(args) => commands::wrap::run(&ctx, args),
        Commands::Unwrap(args) => commands::unwrap::run(&ctx, args),
        Commands::List(args) => commands::list::run(&ctx, args),
        Commands::Init => commands::init::run(&ctx),
        Commands::Template => commands::template::run(&ctx),
    };

    if let Err(e) = result {
        if ctx.json {
            output::output_json_error(cli.command.name(), &format!("{e:#}"));
        } else {
            output::print_error(&format!("Error: {e:#}"));
        }
        std::process::exit(1);
    }
}
