// firestore.rs
use crate::domain::BidRecord;
use crate::source::models::RunQueryItem;
use crate::source::{BidSource, SourceError};
use rand::Rng;
use reqwest::blocking::Client;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("bid_radar/", env!("CARGO_PKG_VERSION"));
const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const COLLECTION: &str = "bids";

/// Reads the `bids` collection through the Firestore REST API.
pub struct FirestoreSource {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
    max_attempts: u64,
}

impl FirestoreSource {
    pub fn new(project_id: impl Into<String>, api_key: Option<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let project_id = project_id.into();
        if project_id.trim().is_empty() {
            return Err(SourceError::Config("Firestore project id is empty".into()));
        }

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id,
            api_key,
            max_attempts: 3,
        })
    }

    /// Points the client at another endpoint, e.g. the Firestore emulator.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents:runQuery",
            self.base_url, self.project_id
        )
    }

    fn fetch_with_retry(&self) -> Result<String, SourceError> {
        const MAX_BACKOFF_SECS: u64 = 10;
        const JITTER_MAX_MILLIS: u64 = 1000;

        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            let start = Instant::now();

            match self.try_fetch() {
                Ok(body) => {
                    debug!(attempt, elapsed = ?start.elapsed(), "firestore query succeeded");
                    return Ok(body);
                }
                Err(e) => {
                    warn!(attempt, elapsed = ?start.elapsed(), error = %e, "firestore query failed");

                    let retry = e.is_retryable() && attempt < self.max_attempts;
                    last_err = Some(e);
                    if !retry {
                        break;
                    }

                    // backoff
                    let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
                    std::thread::sleep(Duration::from_secs(base) + Duration::from_millis(jitter));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| SourceError::Network("firestore retry loop failed".into())))
    }

    fn try_fetch(&self) -> Result<String, SourceError> {
        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": COLLECTION }],
                "orderBy": [{
                    "field": { "fieldPath": "createdAt" },
                    "direction": "DESCENDING"
                }]
            }
        });

        let mut req = self.client.post(self.run_query_url()).json(&query);
        if let Some(key) = &self.api_key {
            req = req.query(&[("key", key)]);
        }

        let resp = req.send().map_err(|e| SourceError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

/// Decodes a runQuery response body. Undecodable documents are skipped.
pub fn parse_run_query(body: &str) -> Result<Vec<BidRecord>, SourceError> {
    let items: Vec<RunQueryItem> =
        serde_json::from_str(body).map_err(|e| SourceError::JsonParse(e.to_string()))?;

    let mut bids = Vec::with_capacity(items.len());
    for doc in items.iter().filter_map(|item| item.document.as_ref()) {
        match doc.to_bid() {
            Ok(bid) => bids.push(bid),
            Err(reason) => warn!(document = %doc.name, %reason, "skipping bid document"),
        }
    }
    Ok(bids)
}

impl BidSource for FirestoreSource {
    fn name(&self) -> &str {
        "firestore"
    }

    fn fetch_initial_records(&self) -> Result<Vec<BidRecord>, SourceError> {
        let body = self.fetch_with_retry()?;
        let bids = parse_run_query(&body)?;
        info!(project = %self.project_id, count = bids.len(), "fetched bids from firestore");
        Ok(bids)
    }
}
