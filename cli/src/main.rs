mod cli;
mod commands;

use cli::{Cli, Commands, VisualizeArgs};
use commands::{inspect, visualize};

/// Log level from the `-v` count; RUST_LOG takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("urbanmap v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Some(Commands::Visualize(args)) => visualize::run(&cli, args),
        Some(Commands::Inspect(args)) => inspect::run(&cli, args),
        None => visualize::run(&cli, &VisualizeArgs::default()),
    }
}

fn main() -> anyhow::Result<()> { run() }
