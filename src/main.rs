use clap::Parser;
use iconfx::cli::{Cli, Commands};
use iconfx::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Apply(args) => iconfx::cli::apply::run(args, &printer)?,
        Commands::Batch(args) => iconfx::cli::batch::run(args, &printer)?,
        Commands::Init(args) => iconfx::cli::init::run(args, &printer)?,
        Commands::Completions(args) => iconfx::cli::completions::run(args)?,
    }

    Ok(())
}

/// `RUST_LOG` wins over the verbosity flags when set.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
