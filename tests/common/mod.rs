#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use combined_table::cricinfo::PageFetcher;
use combined_table::error::{TableError, TableResult};
use combined_table::storage::{RefreshingCache, Sources};
use combined_table::utils::Clock;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const WOMEN_URL: &str = "https://example.test/women/points-table-standings";
pub const MEN_URL: &str = "https://example.test/men/points-table-standings";

pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new() -> Self {
        ManualClock(Mutex::new(Utc.with_ymd_and_hms(2022, 8, 14, 18, 0, 0).unwrap()))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Serves canned pages and counts how many were requested.
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: std::time::Duration,
}

impl FakeFetcher {
    pub fn new(pages: HashMap<String, String>) -> Self {
        FakeFetcher {
            pages,
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay: std::time::Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn page(&self, url: &str) -> TableResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(TableError::Transport(format!("503 Service Unavailable from {url}")));
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| TableError::Transport(format!("404 Not Found from {url}")))
    }
}

pub fn team_stat(name: &str, played: u32, won: u32, lost: u32, scored: &str, conceded: &str) -> Value {
    json!({
        "teamInfo": { "name": name, "longName": name },
        "matchesPlayed": played.to_string(),
        "matchesWon": won,
        "matchesLost": lost,
        "matchesTied": 0,
        "matchesDrawn": 0,
        "matchesNoResult": 0,
        "for": scored,
        "against": conceded,
        "nrr": "0.000",
    })
}

/// A points table page the way the source site embeds its data.
pub fn points_table_page(team_stats: Vec<Value>) -> String {
    let data = json!({
        "props": { "appPageProps": { "data": { "content": { "standings": {
            "groups": [{ "name": "The Hundred", "teamStats": team_stats }]
        }}}}},
        "page": "/series/points-table-standings",
    });
    format!(
        r#"<!DOCTYPE html><html><head><title>Points Table</title></head>
        <body><div id="__next"><div class="table">Standings</div></div>
        <script id="__NEXT_DATA__" type="application/json">{data}</script>
        </body></html>"#
    )
}

/// Alpha leads Beta in both competitions, Gamma has no men's team, Delta no women's team.
pub fn season_pages() -> HashMap<String, String> {
    let women = points_table_page(vec![
        team_stat("Beta", 8, 3, 5, "700/120.0", "760/119.2"),
        team_stat("Alpha", 8, 5, 3, "800/120.3", "750/118.1"),
        team_stat("Gamma", 8, 4, 4, "780/125.0", "780/125.0"),
    ]);
    let men = points_table_page(vec![
        team_stat("Alpha", 8, 6, 2, "900/130.2", "820/125.4"),
        team_stat("Beta", 8, 2, 6, "800/130.0", "850/128.3"),
        team_stat("Delta", 8, 8, 0, "1000/120.0", "700/130.0"),
    ]);
    HashMap::from([(WOMEN_URL.to_string(), women), (MEN_URL.to_string(), men)])
}

pub fn ttl() -> Duration {
    Duration::minutes(10)
}

pub fn cache(fetcher: Arc<FakeFetcher>, clock: Arc<ManualClock>) -> RefreshingCache {
    RefreshingCache::new(
        fetcher,
        clock,
        Sources {
            women: WOMEN_URL.to_string(),
            men: MEN_URL.to_string(),
        },
        "2022".to_string(),
        ttl(),
    )
}
