use clap::Parser;
use tracing_subscriber::EnvFilter;

use genome_mapping::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("genome_mapping=debug,info")
    } else {
        EnvFilter::new("genome_mapping=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Map(args) => {
            cli::map::run(args, cli.verbose)?;
        }
        cli::Commands::List(args) => {
            cli::list::run(args)?;
        }
    }

    Ok(())
}
