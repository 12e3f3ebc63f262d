//! Главный исполняемый файл bqlex

use anyhow::Context;
use bqlex::cli::Cli;
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    env_logger::Builder::new()
        .parse_filters(&config.logging.level)
        .init();
    log::debug!("effective configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = cli.execute(&config, &mut out).context("command failed")?;
    out.flush()?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
