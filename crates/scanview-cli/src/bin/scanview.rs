use anyhow::Result;
use clap::Parser;

use scanview_cli::args::CliArgs;
use scanview_cli::commands;
use scanview_cli::tracing_config::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let output = commands::run(&args)?;
    print!("{output}");
    Ok(())
}
