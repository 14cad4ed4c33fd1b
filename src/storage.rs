use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::core::history::PREVIOUS_YEARS;
use crate::core::table::{merge, rank, Table};
use crate::cricinfo::{self, PageFetcher};
use crate::error::TableResult;
use crate::utils::Clock;

/// Points table pages of the live season.
#[derive(Debug, Clone)]
pub struct Sources {
    pub women: String,
    pub men: String,
}

struct CacheEntry {
    table: Arc<Table>,
    expires_at: DateTime<Utc>,
}

type SharedEntry = Arc<Mutex<Option<CacheEntry>>>;

/// Owner of the live season table, recomputed from the sources once expired.
#[derive(Clone)]
pub struct RefreshingCache {
    entry: SharedEntry,
    fetcher: Arc<dyn PageFetcher>,
    clock: Arc<dyn Clock>,
    sources: Sources,
    year: String,
    ttl: Duration,
}

impl RefreshingCache {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        clock: Arc<dyn Clock>,
        sources: Sources,
        year: String,
        ttl: Duration,
    ) -> RefreshingCache {
        RefreshingCache {
            entry: Arc::new(Mutex::new(None)),
            fetcher,
            clock,
            sources,
            year,
            ttl,
        }
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// The live table and the instant it expires at.
    ///
    /// The lock is held during a refresh: callers arriving meanwhile wait for
    /// its outcome instead of fetching the sources again. A failed refresh
    /// leaves the previous entry as it was.
    pub async fn current_table(&self) -> TableResult<(Arc<Table>, DateTime<Utc>)> {
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if self.clock.now() < cached.expires_at {
                return Ok((cached.table.clone(), cached.expires_at));
            }
        }

        info!("Refreshing combined table for {}.", self.year);
        let table = match self.compute().await {
            Ok(table) => Arc::new(table),
            Err(e) => {
                error!("Could not refresh combined table. {e}");
                return Err(e);
            }
        };
        let expires_at = table.generated_at.unwrap_or_else(|| self.clock.now()) + self.ttl;

        *entry = Some(CacheEntry {
            table: table.clone(),
            expires_at,
        });
        info!("Combined table refreshed, valid until {expires_at}.");

        Ok((table, expires_at))
    }

    /// Drop the entry if it has expired. Returns whether something was evicted.
    ///
    /// Skipped while a refresh holds the entry.
    pub fn evict_expired(&self) -> bool {
        let Ok(mut entry) = self.entry.try_lock() else {
            return false;
        };

        match entry.as_ref() {
            Some(cached) if self.clock.now() >= cached.expires_at => {
                *entry = None;
                true
            }
            _ => false,
        }
    }

    async fn compute(&self) -> TableResult<Table> {
        let (women, men) = tokio::try_join!(
            cricinfo::sections(self.fetcher.as_ref(), &self.sources.women),
            cricinfo::sections(self.fetcher.as_ref(), &self.sources.men),
        )?;

        Ok(Table {
            year: self.year.clone(),
            rows: rank(merge(women, &men)),
            generated_at: Some(self.clock.now()),
            previous_years: &PREVIOUS_YEARS,
        })
    }
}
