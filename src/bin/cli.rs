// src/bin/cli.rs
use ipl_insights::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
