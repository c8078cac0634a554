use clap::Parser;

use tollbooth_api::{
    config::Config,
    run_server,
    tracing_config::{self, HoneycombConfig},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    let mut config = Config::parse();

    let honeycomb_config = config.honeycomb_team.take().map(|team| HoneycombConfig {
        team,
        dataset: std::mem::take(&mut config.honeycomb_dataset),
    });

    tracing_config::configure(honeycomb_config)?;

    let server = run_server(config).await?;
    server.server.await?;

    tracing_config::teardown();

    Ok(())
}
