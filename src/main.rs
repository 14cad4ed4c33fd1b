use combined_table::cli::Cli;
use combined_table::config::Settings;
use combined_table::cricinfo::client::Cricinfo;
use combined_table::scheduler::{JobProcess, Scheduler};
use combined_table::server;
use combined_table::storage::RefreshingCache;
use combined_table::utils::SystemClock;

use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = Settings::new(&cli)?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(settings.get_trace_level())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let fetcher = Cricinfo::new(&settings.user_agent, settings.fetch_timeout())?;
    let cache = RefreshingCache::new(
        Arc::new(fetcher),
        Arc::new(SystemClock),
        settings.sources(),
        settings.current_year.clone(),
        settings.cache_ttl(),
    );

    if cli.stdout {
        println!("{}", server::page(&cache, None).await?);
        return Ok(());
    }

    let sched = Scheduler::new(cache.clone()).await?;
    sched
        .add_job(JobProcess::EvictExpiredTable(
            settings.cache_cleanup_interval(),
        ))
        .await?;

    info!("Starting scheduler.");
    sched.start().await?;

    info!("Starting web server.");
    server::serve(cache, settings.port).await?;

    Ok(())
}
