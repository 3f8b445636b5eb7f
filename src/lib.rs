pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::Config;
pub use crate::core::{engine::ExportEngine, pipeline::CollectionPipeline};
pub use utils::error::{ExportError, Result};
