use anyhow::Result;

mod client;
mod config;
mod error;
mod labels;
mod query;
mod report;
mod runner;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (for log level)
    let config = config::Config::load()?;
    config.validate()?;

    // Initialize logging with the configured level
    let log_level = config.log_level.to_lowercase();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "Benchmarking {} with {} sequential requests (page limit {})",
        config.url,
        config.num_requests,
        config.page_limit
    );
    if let Some(seed) = config.seed {
        tracing::info!("Label sampler seeded with {}", seed);
    }

    let bench = runner::BenchmarkRunner::new(&config)?;
    let report = bench.run().await?;

    report.print_summary();

    if config.json_report {
        println!("{}", report.to_json());
    }

    Ok(())
}
