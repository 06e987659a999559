use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;

use infogain::datasets::weather::play_tennis;
use infogain::ui::cli::args::Cli;
use infogain::ui::cli::commands::execute;

fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let set = play_tennis().context("failed to build the weather dataset")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &set, &mut out).context("command failed")?;
    out.flush()?;

    Ok(())
}
