use tokio_cron_scheduler::{Job, JobScheduler};

use std::time::Duration;
use tracing::{debug, info};

use crate::error::TableResult;
use crate::storage::RefreshingCache;

pub struct Scheduler {
    scheduler: JobScheduler,
    cache: RefreshingCache,
}

pub enum JobProcess {
    /// Periodically drop the live table once it has expired.
    EvictExpiredTable(Duration),
}

impl Scheduler {
    pub async fn new(cache: RefreshingCache) -> TableResult<Self> {
        let scheduler = JobScheduler::new().await?;
        Ok(Scheduler { scheduler, cache })
    }

    pub async fn add_job(&self, job_process: JobProcess) -> TableResult<uuid::Uuid> {
        let job = match job_process {
            JobProcess::EvictExpiredTable(interval) => {
                evict_expired_table_job(interval, self.cache.clone())?
            }
        };
        Ok(self.scheduler.add(job).await?)
    }

    pub async fn start(&self) -> TableResult<()> {
        Ok(self.scheduler.start().await?)
    }
}

//////////////////
// Jobs definition
//////////////////

fn evict_expired_table_job(interval: Duration, cache: RefreshingCache) -> TableResult<Job> {
    info!("Expired tables will be evicted every {}s.", interval.as_secs());
    let job = Job::new_repeated_async(interval, move |_uuid, _l| {
        let cache = cache.clone();
        Box::pin(async move {
            match cache.evict_expired() {
                true => info!("Evicted expired combined table."),
                false => debug!("No expired combined table to evict."),
            }
        })
    })?;
    Ok(job)
}
