#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! lelinspect — send inspection commands to a running game and print the replies.

mod cli;
mod commands;
mod conn;
mod errors;
mod reply;
mod request;

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, OutputCtx, write_error};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    debug!(endpoint = %cli.endpoint(), commands = cli.tokens.len(), "starting");

    let ctx = OutputCtx::new(cli.output, cli.debug);

    match commands::dispatch(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
