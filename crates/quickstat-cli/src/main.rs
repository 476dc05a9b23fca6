use std::io;

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

mod command;
mod util;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()),
        )
        .init();

    command::run()
}
