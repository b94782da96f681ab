mod cli;
mod logging;
mod output;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use engine_logging::engine_error;
use stories_engine::{HackerNewsClient, TopStoriesService};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log_destination(), cli.log_level());

    let (client_settings, service_settings) = cli.settings();
    let client = HackerNewsClient::new(client_settings).context("building http client")?;
    let service = TopStoriesService::new(Arc::new(client), &service_settings)
        .context("invalid --overfetch-factor")?;

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let top = runtime
        .block_on(service.top_stories(service_settings.target_count))
        .inspect_err(|err| engine_error!("{}", err))?;

    let mut stdout = io::stdout().lock();
    output::write_listing(&mut stdout, &top)?;
    stdout.flush()?;
    Ok(())
}
