// src/bin/cli.rs
use clap::Parser;
use spec_lookup::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    if let Err(e) = spec_lookup::log::init(args.log_level()) {
        eprintln!("Logger unavailable: {e}");
    }

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
