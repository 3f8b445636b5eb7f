use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting collection export...");

        println!("Fetching collection...");
        let raw_items = self.pipeline.extract().await?;
        println!("Fetched {} releases", raw_items.len());

        println!("Enriching releases with marketplace prices...");
        let records = self.pipeline.transform(raw_items).await?;
        println!("Enriched {} releases", records.len());

        println!("Writing report...");
        let output_path = self.pipeline.load(records).await?;
        println!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BasicInformation, NormalizedRecord, RawCollectionItem};
    use crate::utils::error::ExportError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPipeline {
        stages: Mutex<Vec<&'static str>>,
        fail_extract: bool,
    }

    impl MockPipeline {
        fn new(fail_extract: bool) -> Self {
            Self {
                stages: Mutex::new(Vec::new()),
                fail_extract,
            }
        }
    }

    fn raw_item(id: u64) -> RawCollectionItem {
        RawCollectionItem {
            id,
            date_added: "2017-05-05T21:34:15-07:00".to_string(),
            basic_information: BasicInformation {
                title: format!("Title {}", id),
                year: 1990,
                master_id: 0,
                artists: vec![],
                formats: vec![],
                genres: vec![],
                styles: vec![],
            },
            notes: vec![],
        }
    }

    fn record(id: u64) -> NormalizedRecord {
        NormalizedRecord {
            id,
            master_id: 0,
            artist: "Artist".to_string(),
            artist_id: 10,
            title: format!("Title {}", id),
            year: 1990,
            format: "Vinyl".to_string(),
            format_info: "N/A".to_string(),
            genres: String::new(),
            styles: String::new(),
            notes: "Mint".to_string(),
            date_added: "2017-05-05".to_string(),
            time_added: "21:34:15-07:00".to_string(),
            lowest_price: 0.0,
        }
    }

    #[async_trait]
    impl Pipeline for MockPipeline {
        async fn extract(&self) -> Result<Vec<RawCollectionItem>> {
            self.stages.lock().unwrap().push("extract");
            if self.fail_extract {
                return Err(ExportError::MissingNextPage { pages: 2, page: 2 });
            }
            Ok(vec![raw_item(1), raw_item(2)])
        }

        async fn transform(
            &self,
            items: Vec<RawCollectionItem>,
        ) -> Result<Vec<NormalizedRecord>> {
            self.stages.lock().unwrap().push("transform");
            Ok(items.iter().map(|item| record(item.id)).collect())
        }

        async fn load(&self, records: Vec<NormalizedRecord>) -> Result<String> {
            self.stages.lock().unwrap().push("load");
            Ok(format!("./report_{}.xlsx", records.len()))
        }
    }

    #[tokio::test]
    async fn test_run_drives_stages_in_order() {
        let pipeline = MockPipeline::new(false);
        let engine = ExportEngine::new(pipeline);

        let output_path = engine.run().await.unwrap();

        assert_eq!(output_path, "./report_2.xlsx");
        let stages = engine.pipeline.stages.lock().unwrap();
        assert_eq!(*stages, vec!["extract", "transform", "load"]);
    }

    #[tokio::test]
    async fn test_run_stops_at_first_failing_stage() {
        let pipeline = MockPipeline::new(true);
        let engine = ExportEngine::new(pipeline);

        let result = engine.run().await;

        assert!(result.is_err());
        let stages = engine.pipeline.stages.lock().unwrap();
        assert_eq!(*stages, vec!["extract"]);
    }
}
