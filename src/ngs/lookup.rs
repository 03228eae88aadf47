use crate::app_config::AppConfig;
use crate::domain::HeightResult;
use crate::ngs::geoid_response::GeoidResponse;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Model id of GEOID18 in the NGS geoid height service.
pub const GEOID18_MODEL_ID: u32 = 14;

#[async_trait]
pub trait HeightLookup: Send + Sync {
    /// Looks up the geoid height at a point. Coordinates are passed on to the service as is, without range checks.
    async fn lookup(&self, latitude: f64, longitude: f64) -> Result<HeightResult, LookupError>;
}

/// Queries the NGS geoid height service, e.g. `GET /api/geoid/ght?lat=40&lon=-75&model=14`.
#[derive(Debug)]
pub struct NgsClient {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
struct GeoidQuery {
    lat: f64,
    lon: f64,
    model: u32,
}

impl NgsClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        NgsClient {
            client,
            url: config.ngs().url().to_string(),
        }
    }
}

#[async_trait]
impl HeightLookup for NgsClient {
    #[instrument(skip(self))]
    async fn lookup(&self, latitude: f64, longitude: f64) -> Result<HeightResult, LookupError> {
        debug!(url = %self.url, "Retrieving geoid height...");

        let query = GeoidQuery {
            lat: latitude,
            lon: longitude,
            model: GEOID18_MODEL_ID,
        };
        let response = self.client.get(&self.url).query(&query).send().await?.error_for_status()?;
        let geoid_response = response.json::<GeoidResponse>().await?;

        let Some(height_meters) = geoid_response.geoid_height else {
            warn!("⚠️ Response did not contain a geoid height");
            return Err(LookupError::MissingHeight);
        };

        info!(model = ?geoid_response.geoid_model, "Retrieving geoid height... OK, {} m", height_meters);
        Ok(HeightResult::from_meters(latitude, longitude, height_meters))
    }
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("An error occurred while fetching geoid height: {0}")]
    NetworkFailure(String),
    #[error("Geoid height not found in the response.")]
    MissingHeight,
    #[error("Please enter valid numeric values for latitude and longitude.")]
    InvalidInput { field: &'static str, value: String },
}

impl LookupError {
    /// Title of the error dialog.
    pub fn title(&self) -> &'static str {
        match self {
            LookupError::InvalidInput { .. } => "Input Error",
            LookupError::NetworkFailure(_) | LookupError::MissingHeight => "Error",
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        LookupError::NetworkFailure(error.to_string())
    }
}
