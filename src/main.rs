use clap::Parser;
use tracing_subscriber::EnvFilter;

use motif_mark::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("motif_mark=debug,info")
    } else {
        EnvFilter::new("motif_mark=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Render(args) => {
            cli::render::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Locate(args) => {
            cli::locate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Expand(args) => {
            cli::expand::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
