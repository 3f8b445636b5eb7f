use crate::domain::model::{NormalizedRecord, RawCollectionItem};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Pacing policy applied between consecutive marketplace lookups so the
/// upstream service is not hammered. Tests use a no-op implementation.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawCollectionItem>>;
    async fn transform(&self, items: Vec<RawCollectionItem>) -> Result<Vec<NormalizedRecord>>;
    async fn load(&self, records: Vec<NormalizedRecord>) -> Result<String>;
}
