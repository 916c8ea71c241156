// File: src/client/core.rs
use crate::model::School;
use serde::Deserialize;

/// The listing endpoint may hand back a bare array or wrap it in an object
/// with a `data` field. Both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListingPayload {
    Wrapped { data: Vec<School> },
    Bare(Vec<School>),
}

impl ListingPayload {
    pub fn into_schools(self) -> Vec<School> {
        match self {
            ListingPayload::Wrapped { data } => data,
            ListingPayload::Bare(schools) => schools,
        }
    }
}

/// Client for the schools listing API. One GET per session, no retries, no
/// caching; errors are surfaced as human-readable strings for the UI.
#[derive(Clone, Debug)]
pub struct ListingClient {
    http: reqwest::Client,
    url: String,
}

impl ListingClient {
    pub fn new(url: &str) -> Result<Self, String> {
        if url.trim().is_empty() {
            return Err("No listing URL configured.".to_string());
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("schoolscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            url: url.trim().to_string(),
        })
    }

    pub async fn fetch_schools(&self) -> Result<Vec<School>, String> {
        log::info!("Fetching school listings from {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch schools data: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Failed to fetch schools data: {}", status.as_u16()));
        }

        let payload: ListingPayload = response
            .json()
            .await
            .map_err(|e| format!("Failed to decode schools data: {}", e))?;

        let schools = payload.into_schools();
        log::info!("Loaded {} school listings", schools.len());
        Ok(schools)
    }
}
