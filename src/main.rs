use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod insight;
mod llm;
mod metrics;
mod outlet;
mod server;
mod trend;
mod types;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let serve = args.serve;
    let daily = args.daily;
    let config = args.into_config();

    if serve {
        return server::serve(config).await;
    }

    if daily {
        let insight = insight::generate_daily_insight(&config).await?;
        println!("{}", serde_json::to_string_pretty(&insight)?);
        return Ok(());
    }

    insight::launch(&config).await
}
