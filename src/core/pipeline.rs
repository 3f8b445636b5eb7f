use crate::config::Config;
use crate::core::enricher::ItemEnricher;
use crate::core::fetcher::CollectionFetcher;
use crate::core::pacing::FixedDelayPacer;
use crate::core::valuation::appraise;
use crate::domain::model::{NormalizedRecord, RawCollectionItem};
use crate::domain::ports::{Pacer, Pipeline, Storage};
use crate::export::xlsx::{build_workbook, report_file_name};
use crate::utils::error::Result;
use chrono::Local;
use reqwest::Client;

/// The full fetch → enrich → report pipeline. One HTTP client for the whole
/// run, with an explicit request timeout from the configuration.
pub struct CollectionPipeline<S: Storage> {
    storage: S,
    config: Config,
    pacer: Box<dyn Pacer>,
    client: Client,
}

impl<S: Storage> CollectionPipeline<S> {
    pub fn new(storage: S, config: Config) -> Result<Self> {
        let pacer = Box::new(FixedDelayPacer::new(config.price_lookup_delay));
        Self::with_pacer(storage, config, pacer)
    }

    pub fn with_pacer(storage: S, config: Config, pacer: Box<dyn Pacer>) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            storage,
            config,
            pacer,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for CollectionPipeline<S> {
    async fn extract(&self) -> Result<Vec<RawCollectionItem>> {
        CollectionFetcher::new(&self.client, &self.config)
            .fetch_all()
            .await
    }

    async fn transform(&self, items: Vec<RawCollectionItem>) -> Result<Vec<NormalizedRecord>> {
        let enricher = ItemEnricher::new(&self.client, &self.config, self.pacer.as_ref());

        // Strictly sequential: one enrichment (and one paced marketplace
        // lookup) at a time, preserving collection order.
        let mut records = Vec::with_capacity(items.len());
        for item in items {
            records.push(enricher.enrich(item).await?);
        }

        Ok(records)
    }

    async fn load(&self, records: Vec<NormalizedRecord>) -> Result<String> {
        let valuation = appraise(&records);
        println!(
            "Total value is {} but prices are missing from {}",
            valuation.total_value,
            valuation.missing.join(", ")
        );

        let file_name = report_file_name(Local::now().date_naive());
        let workbook = build_workbook(&records)?;

        tracing::debug!("Writing report ({} bytes) to storage", workbook.len());
        self.storage.write_file(&file_name, &workbook).await?;

        Ok(format!("{}/{}", self.config.output_dir, file_name))
    }
}
