use clap::Parser;
use drinkhub::config::Config;
use drinkhub::{logging, ui};
use std::path::PathBuf;

/// Terminal client for the drinks inventory service.
#[derive(Debug, Parser)]
#[command(name = "drinkhub", version, about)]
struct Args {
    /// Override the API base URL from the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Read configuration from an explicit path instead of the default
    /// location.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    ui::runtime::run(config)
}
