mod app;
mod cli;
mod effects;
mod logging;
mod persistence;
mod render;
mod timers;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log.into());
    app::run(cli)
}
