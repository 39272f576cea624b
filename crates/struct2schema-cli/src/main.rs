use anyhow::Result;
use clap::Parser;
use struct2schema_cli::Cli;

use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "struct2schema: {}", record.args()))
        .init();

    let cli = Cli::parse();
    log::debug!("config={:?}", cli.config());

    let stdout = io::stdout();
    cli.run(&mut stdout.lock())
}
