pub mod client;
pub mod extract;
pub mod standings;

use crate::{core::table::Sections, error::TableResult};
use async_trait::async_trait;

/// Anything able to retrieve the markup of a points table page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn page(&self, url: &str) -> TableResult<String>;
}

/// Fetch a points table page and decode the team sections embedded in it.
pub async fn sections(fetcher: &dyn PageFetcher, url: &str) -> TableResult<Sections> {
    let markup = fetcher.page(url).await?;
    let payload = extract::embedded_payload(&markup)?;
    standings::decode(&payload)
}
