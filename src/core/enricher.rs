use crate::config::Config;
use crate::domain::model::{MarketplaceStats, NormalizedRecord, RawCollectionItem};
use crate::domain::ports::Pacer;
use crate::utils::error::{ExportError, Result};
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;

/// Trailing numeric disambiguation suffix, e.g. `"Nirvana (2)"`.
static ARTIST_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d+\)$").expect("artist suffix pattern"));

/// Flattens one raw collection item into a `NormalizedRecord`, performing a
/// single marketplace-stats lookup per item. Lookups are spaced out by the
/// injected pacing policy.
pub struct ItemEnricher<'a> {
    client: &'a Client,
    config: &'a Config,
    pacer: &'a dyn Pacer,
}

impl<'a> ItemEnricher<'a> {
    pub fn new(client: &'a Client, config: &'a Config, pacer: &'a dyn Pacer) -> Self {
        Self {
            client,
            config,
            pacer,
        }
    }

    pub async fn enrich(&self, item: RawCollectionItem) -> Result<NormalizedRecord> {
        let release_id = item.id;
        let bi = &item.basic_information;

        let artist_entry = bi.artists.first().ok_or(ExportError::MissingField {
            release_id,
            field: "artists",
        })?;
        let artist = clean_artist_name(&artist_entry.name);

        let (date_added, time_added) = split_date_added(&item.date_added)?;

        let format_entry = bi.formats.first().ok_or(ExportError::MissingField {
            release_id,
            field: "formats",
        })?;
        let format_info = format_entry
            .text
            .clone()
            .unwrap_or_else(|| "N/A".to_string());

        // First collection note only. An item without notes fails the run.
        let notes = item
            .notes
            .first()
            .map(|note| note.value.clone())
            .ok_or(ExportError::MissingField {
                release_id,
                field: "notes",
            })?;

        self.pacer.pause().await;
        let lowest_price = self.lookup_lowest_price(release_id, &bi.title, &artist).await?;

        Ok(NormalizedRecord {
            id: release_id,
            master_id: bi.master_id,
            artist,
            artist_id: artist_entry.id,
            title: bi.title.clone(),
            year: bi.year,
            format: format_entry.name.clone(),
            format_info,
            genres: join_list(&bi.genres),
            styles: join_list(&bi.styles),
            notes,
            date_added,
            time_added,
            lowest_price,
        })
    }

    async fn lookup_lowest_price(
        &self,
        release_id: u64,
        title: &str,
        artist: &str,
    ) -> Result<f64> {
        let url = format!(
            "{}/marketplace/stats/{}?curr_abbr={}&token={}",
            self.config.api_base, release_id, self.config.currency, self.config.token
        );

        tracing::debug!("Requesting marketplace stats for release {}", release_id);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let stats = response.json::<MarketplaceStats>().await?;

        if stats.num_for_sale == 0 {
            println!("{} by {} has no copies for sale", title, artist);
            return Ok(0.0);
        }

        Ok(stats.lowest_price.map(|price| price.value).unwrap_or(0.0))
    }
}

/// Strips the trailing `(<digits>)` disambiguation suffix the catalog appends
/// to non-unique artist names, then trims trailing whitespace.
pub fn clean_artist_name(name: &str) -> String {
    ARTIST_SUFFIX.replace(name, "").trim_end().to_string()
}

/// Splits an ISO-8601 `date_added` timestamp into its calendar date and its
/// time-of-day (offset suffix kept verbatim).
pub fn split_date_added(date_added: &str) -> Result<(String, String)> {
    let (date, time) = date_added
        .split_once('T')
        .ok_or_else(|| ExportError::MalformedTimestamp {
            value: date_added.to_string(),
        })?;
    Ok((date.to_string(), time.to_string()))
}

pub fn join_list(values: &[String]) -> String {
    values.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pacing::NoopPacer;
    use crate::domain::model::{BasicInformation, CollectionNote, ReleaseArtist, ReleaseFormat};
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_config(server: &MockServer) -> Config {
        let mut config = Config::new("collector", "tok123");
        config.api_base = server.base_url();
        config
    }

    fn raw_item(id: u64) -> RawCollectionItem {
        RawCollectionItem {
            id,
            date_added: "2017-05-05T21:34:15-07:00".to_string(),
            basic_information: BasicInformation {
                title: "Nevermind".to_string(),
                year: 1991,
                master_id: 13814,
                artists: vec![ReleaseArtist {
                    id: 125246,
                    name: "Nirvana (2)".to_string(),
                }],
                formats: vec![ReleaseFormat {
                    name: "Vinyl".to_string(),
                    text: None,
                }],
                genres: vec!["Rock".to_string()],
                styles: vec!["Grunge".to_string(), "Alternative Rock".to_string()],
            },
            notes: vec![CollectionNote {
                value: "VG+ sleeve".to_string(),
            }],
        }
    }

    #[test]
    fn test_clean_artist_name_strips_suffix() {
        assert_eq!(clean_artist_name("Nirvana (2)"), "Nirvana");
        assert_eq!(clean_artist_name("Fleetwood Mac"), "Fleetwood Mac");
    }

    #[test]
    fn test_clean_artist_name_is_idempotent() {
        let cleaned = clean_artist_name("Artist Name (2)");
        assert_eq!(cleaned, "Artist Name");
        assert_eq!(clean_artist_name(&cleaned), cleaned);
    }

    #[test]
    fn test_split_date_added() {
        let (date, time) = split_date_added("2017-05-05T21:34:15-07:00").unwrap();
        assert_eq!(date, "2017-05-05");
        assert_eq!(time, "21:34:15-07:00");
    }

    #[test]
    fn test_split_date_added_without_separator_fails() {
        assert!(split_date_added("2017-05-05").is_err());
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(&[]), "");
        assert_eq!(join_list(&["Rock".to_string()]), "Rock");
        assert_eq!(
            join_list(&["Rock".to_string(), "Pop".to_string()]),
            "Rock, Pop"
        );
    }

    #[tokio::test]
    async fn test_enrich_builds_record_with_lowest_price() {
        let server = MockServer::start();
        let config = test_config(&server);

        let stats = server.mock(|when, then| {
            when.method(GET)
                .path("/marketplace/stats/42")
                .query_param("curr_abbr", "USD");
            then.status(200).json_body(json!({
                "num_for_sale": 7,
                "lowest_price": {"currency": "USD", "value": 14.99}
            }));
        });

        let client = Client::new();
        let enricher = ItemEnricher::new(&client, &config, &NoopPacer);
        let record = enricher.enrich(raw_item(42)).await.unwrap();

        stats.assert();
        assert_eq!(record.id, 42);
        assert_eq!(record.artist, "Nirvana");
        assert_eq!(record.artist_id, 125246);
        assert_eq!(record.title, "Nevermind");
        assert_eq!(record.format, "Vinyl");
        assert_eq!(record.format_info, "N/A");
        assert_eq!(record.genres, "Rock");
        assert_eq!(record.styles, "Grunge, Alternative Rock");
        assert_eq!(record.notes, "VG+ sleeve");
        assert_eq!(record.date_added, "2017-05-05");
        assert_eq!(record.time_added, "21:34:15-07:00");
        assert_eq!(record.lowest_price, 14.99);
    }

    #[tokio::test]
    async fn test_zero_listings_price_defaults_even_with_stray_price_field() {
        let server = MockServer::start();
        let config = test_config(&server);

        server.mock(|when, then| {
            when.method(GET).path("/marketplace/stats/42");
            then.status(200).json_body(json!({
                "num_for_sale": 0,
                "lowest_price": {"currency": "USD", "value": 99.99}
            }));
        });

        let client = Client::new();
        let enricher = ItemEnricher::new(&client, &config, &NoopPacer);
        let record = enricher.enrich(raw_item(42)).await.unwrap();

        assert_eq!(record.lowest_price, 0.0);
    }

    #[tokio::test]
    async fn test_listed_item_without_price_value_defaults_to_zero() {
        let server = MockServer::start();
        let config = test_config(&server);

        server.mock(|when, then| {
            when.method(GET).path("/marketplace/stats/42");
            then.status(200)
                .json_body(json!({"num_for_sale": 3, "lowest_price": null}));
        });

        let client = Client::new();
        let enricher = ItemEnricher::new(&client, &config, &NoopPacer);
        let record = enricher.enrich(raw_item(42)).await.unwrap();

        assert_eq!(record.lowest_price, 0.0);
    }

    #[tokio::test]
    async fn test_empty_notes_fail_the_item() {
        let server = MockServer::start();
        let config = test_config(&server);

        let mut item = raw_item(42);
        item.notes.clear();

        let client = Client::new();
        let enricher = ItemEnricher::new(&client, &config, &NoopPacer);
        let err = enricher.enrich(item).await.unwrap_err();

        assert!(matches!(
            err,
            ExportError::MissingField {
                release_id: 42,
                field: "notes"
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_artist_list_fails_the_item() {
        let server = MockServer::start();
        let config = test_config(&server);

        let mut item = raw_item(42);
        item.basic_information.artists.clear();

        let client = Client::new();
        let enricher = ItemEnricher::new(&client, &config, &NoopPacer);
        let err = enricher.enrich(item).await.unwrap_err();

        assert!(matches!(
            err,
            ExportError::MissingField {
                release_id: 42,
                field: "artists"
            }
        ));
    }
}
