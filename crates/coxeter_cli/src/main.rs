//! Command-line interface for Coxeter groups and super crystals.

mod cli;
mod parse;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    env_logger::builder().init();
    color_eyre::install()?;

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
