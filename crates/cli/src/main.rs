mod cli;
mod config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let cfg = config::AppConfig::load_or_default()?;

    //  Logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        )
        .init();

    let output = args.global.output.unwrap_or(cfg.output);
    tracing::debug!(?output, "starting");

    match args.command {
        cli::Commands::Scan(scan_args) => cli::scan::execute(scan_args, &cfg, output),
        cli::Commands::Explain(explain_args) => cli::explain::execute(explain_args, output),
        cli::Commands::Config(c) => cli::config_cmd::execute(c),
    }
}
