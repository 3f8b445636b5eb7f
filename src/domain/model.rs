use serde::{Deserialize, Serialize};

/// One page of the collection endpoint. Both keys are required; a response
/// missing either is a schema error that fails the run.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionPage {
    pub releases: Vec<RawCollectionItem>,
    pub pagination: Pagination,
}

/// Pagination cursor: total page count plus the URL of the next page.
/// `urls.next` is absent on the last page, which terminates the fetch loop.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub pages: u64,
    #[serde(default)]
    pub urls: PageUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageUrls {
    pub next: Option<String>,
}

/// A collection release as returned by the API. Held only between fetch and
/// flatten; discarded once the normalized record is built.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCollectionItem {
    pub id: u64,
    pub date_added: String,
    pub basic_information: BasicInformation,
    #[serde(default)]
    pub notes: Vec<CollectionNote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BasicInformation {
    pub title: String,
    #[serde(default)]
    pub year: u64,
    #[serde(default)]
    pub master_id: u64,
    #[serde(default)]
    pub artists: Vec<ReleaseArtist>,
    #[serde(default)]
    pub formats: Vec<ReleaseFormat>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseArtist {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseFormat {
    pub name: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionNote {
    pub value: String,
}

/// Marketplace stats for a single release. `lowest_price` is null when the
/// market has no listings.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceStats {
    #[serde(default)]
    pub num_for_sale: u64,
    #[serde(default)]
    pub lowest_price: Option<PriceValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceValue {
    #[serde(default)]
    pub value: f64,
}

/// The flattened, enrichment-complete record written to the report.
/// Immutable once built; one per raw collection item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub id: u64,
    pub master_id: u64,
    pub artist: String,
    pub artist_id: u64,
    pub title: String,
    pub year: u64,
    pub format: String,
    pub format_info: String,
    pub genres: String,
    pub styles: String,
    pub notes: String,
    pub date_added: String,
    pub time_added: String,
    pub lowest_price: f64,
}

/// Aggregate market value of the collection: sum of the non-zero lowest
/// prices, plus the titles no price was found for.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionValuation {
    pub total_value: f64,
    pub missing: Vec<String>,
}
