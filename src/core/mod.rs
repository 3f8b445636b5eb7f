pub mod engine;
pub mod enricher;
pub mod fetcher;
pub mod pacing;
pub mod pipeline;
pub mod valuation;

pub use crate::domain::model::{CollectionValuation, NormalizedRecord, RawCollectionItem};
pub use crate::domain::ports::{Pacer, Pipeline, Storage};
pub use crate::utils::error::Result;
