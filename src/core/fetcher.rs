use crate::config::Config;
use crate::domain::model::{CollectionPage, RawCollectionItem};
use crate::utils::error::{ExportError, Result};
use reqwest::Client;

/// Walks the paginated collection endpoint and accumulates every release in
/// the configured folder. One request per reported page, in order; the
/// cursor URL of each response drives the next request.
pub struct CollectionFetcher<'a> {
    client: &'a Client,
    config: &'a Config,
}

impl<'a> CollectionFetcher<'a> {
    pub fn new(client: &'a Client, config: &'a Config) -> Self {
        Self { client, config }
    }

    pub async fn fetch_all(&self) -> Result<Vec<RawCollectionItem>> {
        let first_url = format!(
            "{}/users/{}/collection/folders/{}/releases?token={}",
            self.config.api_base, self.config.username, self.config.folder_id, self.config.token
        );

        let page = self.fetch_page(&first_url, 1).await?;
        let pages = page.pagination.pages;
        let mut next = page.pagination.urls.next;
        let mut items = page.releases;

        if pages == 1 {
            println!("Titles less than 50");
        } else {
            for page_no in 2..=pages {
                let url = next
                    .take()
                    .ok_or(ExportError::MissingNextPage { pages, page: page_no })?;
                let page = self.fetch_page(&url, page_no).await?;
                next = page.pagination.urls.next;
                items.extend(page.releases);
            }
        }

        println!("Total collection is {} items", items.len());

        Ok(items)
    }

    async fn fetch_page(&self, url: &str, page_no: u64) -> Result<CollectionPage> {
        tracing::debug!("Requesting collection page {}", page_no);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let page = response.json::<CollectionPage>().await?;
        tracing::debug!(
            "Page {} returned {} releases ({} pages total)",
            page_no,
            page.releases.len(),
            page.pagination.pages
        );
        Ok(page)
    }
}
