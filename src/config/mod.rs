use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_secs, validate_url, Validate,
};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.discogs.com";

const USERNAME_VAR: &str = "USER_NAME";
const TOKEN_VAR: &str = "DISCOGS_TOKEN";

/// Runtime configuration, built once in `main` and passed into the pipeline.
/// Credentials come from the environment; everything else has fixed defaults
/// that tests override directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub token: String,
    pub api_base: String,
    /// Collection folder to export. Folder 0 is the "All" folder.
    pub folder_id: u32,
    pub currency: String,
    /// Delay applied before each marketplace stats lookup.
    pub price_lookup_delay: Duration,
    pub request_timeout: Duration,
    pub output_dir: String,
}

impl Config {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            folder_id: 0,
            currency: "USD".to_string(),
            price_lookup_delay: Duration::from_secs(2),
            request_timeout: Duration::from_secs(30),
            output_dir: ".".to_string(),
        }
    }

    /// Reads the two credential variables from the process environment.
    pub fn from_env() -> Result<Self> {
        let username = env::var(USERNAME_VAR).map_err(|_| ExportError::MissingConfig {
            field: USERNAME_VAR.to_string(),
        })?;
        let token = env::var(TOKEN_VAR).map_err(|_| ExportError::MissingConfig {
            field: TOKEN_VAR.to_string(),
        })?;

        Ok(Self::new(username, token))
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("username", &self.username)?;
        validate_non_empty_string("token", &self.token)?;
        validate_non_empty_string("currency", &self.currency)?;
        validate_non_empty_string("output_dir", &self.output_dir)?;
        validate_url("api_base", &self.api_base)?;
        validate_positive_secs("request_timeout", self.request_timeout.as_secs())?;
        Ok(())
    }
}
