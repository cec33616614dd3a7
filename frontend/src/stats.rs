//! "Live" view statistics for the banner, estimated by a generative model at
//! most once per local calendar day. Any failure degrades to the last known
//! numbers, or to the baseline; the visitor never sees an error.

use crate::clock::{date_key, Clock, LocalClock};
use crate::config;
use crate::config::keys;
use crate::content::baseline_stats;
use crate::error::TransportError;
use crate::http::{FetchClient, HttpClient, HttpRequest};
use crate::models::PerformanceStats;
use crate::storage::{load_json, save_json, BrowserStorage, KeyValueStore};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::json;

const DAYS_PER_YEAR: u64 = 365;

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Shape the model is asked to answer in; extra keys are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedStats {
    total_views: f64,
    last_updated: String,
    hook_message: String,
    #[serde(default)]
    daily_views: Option<f64>,
    #[serde(default)]
    per_capita_views: Option<f64>,
}

fn prompt(channels: &[&str]) -> String {
    format!(
        "You track YouTube channel performance for a Korean video agency. \
         Estimate the combined all-time view count of these channels: {}. \
         Answer only with JSON: totalViews (integer), dailyViews (integer, \
         combined views per day), perCapitaViews (integer, average views per \
         channel), lastUpdated (date as YYYY.MM.DD) and hookMessage (one short \
         Korean marketing sentence citing the total).",
        channels.join(", ")
    )
}

fn request_body(channels: &[&str]) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt(channels) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "totalViews": { "type": "NUMBER" },
                    "dailyViews": { "type": "NUMBER" },
                    "perCapitaViews": { "type": "NUMBER" },
                    "lastUpdated": { "type": "STRING" },
                    "hookMessage": { "type": "STRING" }
                },
                "required": ["totalViews", "lastUpdated", "hookMessage"]
            }
        }
    })
}

fn to_count(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u64)
}

fn parse_generated(body: &str, channel_count: usize) -> Result<PerformanceStats, TransportError> {
    let decode = |reason: &str| TransportError::Decode(reason.to_string());
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| decode(&e.to_string()))?;
    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.trim())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| decode("empty candidate"))?;

    let generated: GeneratedStats = serde_json::from_str(text).map_err(|e| decode(&e.to_string()))?;
    let total_views = to_count(generated.total_views).ok_or_else(|| decode("totalViews out of range"))?;
    let daily_views = generated
        .daily_views
        .and_then(to_count)
        .unwrap_or(total_views / DAYS_PER_YEAR);
    let per_capita_views = generated
        .per_capita_views
        .and_then(to_count)
        .unwrap_or(total_views / channel_count.max(1) as u64);

    Ok(PerformanceStats {
        total_views,
        daily_views,
        per_capita_views,
        last_updated: generated.last_updated,
        hook_message: generated.hook_message,
    })
}

pub struct StatsFetcher<H, S, C> {
    http: H,
    store: S,
    clock: C,
    api_key: Option<String>,
    channels: Vec<&'static str>,
}

impl<H, S, C> StatsFetcher<H, S, C>
where
    H: HttpClient,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(http: H, store: S, clock: C) -> Self {
        Self {
            http,
            store,
            clock,
            api_key: config::gemini_api_key().map(str::to_string),
            channels: config::TRACKED_CHANNELS.to_vec(),
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.is_empty());
        self
    }

    fn cached(&self) -> Option<PerformanceStats> {
        load_json(&self.store, keys::STATS)
    }

    fn remember(&self, today: &str, stats: &PerformanceStats) {
        let stored = save_json(&self.store, keys::STATS, stats)
            .and_then(|_| self.store.set(keys::STATS_DATE, today));
        if let Err(e) = stored {
            warn!("Could not cache stats: {}", e);
        }
    }

    async fn generate(&self, api_key: &str) -> Result<PerformanceStats, TransportError> {
        let url = format!("{}/{}:generateContent", config::GEMINI_ENDPOINT, config::gemini_model());
        let request = HttpRequest::post(url)
            .header("x-goog-api-key", api_key)
            .json(&request_body(&self.channels))?;
        let response = self.http.send(request).await?;
        if !response.ok() {
            return Err(TransportError::Status(response.status));
        }
        parse_generated(&response.body, self.channels.len())
    }

    pub async fn get_stats(&self, force_refresh: bool) -> PerformanceStats {
        let today = date_key(self.clock.today());
        if !force_refresh && self.store.get(keys::STATS_DATE).as_deref() == Some(today.as_str()) {
            if let Some(stats) = self.cached() {
                debug!("Using stats cached on {}", today);
                return stats;
            }
        }

        let Some(api_key) = self.api_key.clone() else {
            return baseline_stats();
        };

        let stats = match self.generate(&api_key).await {
            Ok(stats) => {
                info!("Fetched fresh stats: {} total views", stats.total_views);
                stats
            }
            Err(e) => {
                warn!("Stats generation failed, keeping previous numbers: {}", e);
                self.cached().unwrap_or_else(baseline_stats)
            }
        };
        self.remember(&today, &stats);
        stats
    }
}

impl StatsFetcher<FetchClient, BrowserStorage, LocalClock> {
    pub fn browser() -> Self {
        StatsFetcher::new(FetchClient::default(), BrowserStorage::local(), LocalClock)
    }
}
