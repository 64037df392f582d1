use anyhow::Context;
use clap::Parser;

use catalog_view::catalog::CatalogClient;
use catalog_view::cli::Cli;
use catalog_view::logging::init_tracing;
use catalog_view::share::QueryParams;
use catalog_view::ui::runtime::{run_interactive, run_once, RunOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;
    let client = CatalogClient::new(&config.source).context("Failed to set up catalog client")?;
    let query = QueryParams::parse(cli.query.as_deref().unwrap_or(""));

    if cli.interactive {
        run_interactive(&client, &config, query)
            .await
            .context("Interactive session failed")?;
        return Ok(());
    }

    let options = RunOptions {
        pages: cli.pages as usize,
        json: cli.json,
    };
    let output = run_once(&client, &config, &query, &options)
        .await
        .context("Failed to render catalog")?;
    println!("{output}");
    Ok(())
}
