use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::info;

use crate::cricinfo::PageFetcher;
use crate::error::{TableError, TableResult};

pub struct Cricinfo {
    http_client: Client,
}

impl Cricinfo {
    pub fn new(user_agent: &str, timeout: Duration) -> TableResult<Self> {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl PageFetcher for Cricinfo {
    async fn page(&self, url: &str) -> TableResult<String> {
        info!("Fetching points table {url}");
        let response = self.http_client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.text().await?),
            status => Err(TableError::Transport(format!("{status} from {url}"))),
        }
    }
}
