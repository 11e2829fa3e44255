// src/bin/etl.rs
use happy_quotes::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::Target::Stderr);
    cli::run()?;
    Ok(())
}
