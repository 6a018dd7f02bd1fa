//! Optional lineup suggestions from an external text-generation API.
//!
//! The collaborator is strictly best-effort: any transport, status, or
//! payload problem becomes `None`, and callers treat `None` as "nothing to
//! add". Core flows never block on it.

use serde::{Deserialize, Serialize};

/// One suggested player: fictional name, typical position, jersey number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPlayer {
    pub name: String,
    pub position: String,
    pub number: String,
}

/// Source of generated player suggestions for a sport.
pub trait LineupSuggester {
    /// Up to `count` suggestions, or `None` when the source is unavailable
    /// or returned garbage.
    fn suggest(&self, sport_name: &str, count: usize) -> Option<Vec<SuggestedPlayer>>;
}

/// Canned suggestions for tests and offline use.
pub struct StaticSuggester {
    players: Vec<SuggestedPlayer>,
}

impl StaticSuggester {
    pub fn new(players: Vec<SuggestedPlayer>) -> Self {
        Self { players }
    }
}

impl LineupSuggester for StaticSuggester {
    fn suggest(&self, _sport_name: &str, count: usize) -> Option<Vec<SuggestedPlayer>> {
        Some(self.players.iter().take(count).cloned().collect())
    }
}

#[cfg(feature = "http")]
pub use http::HttpSuggester;

#[cfg(feature = "http")]
mod http {
    use super::{LineupSuggester, SuggestedPlayer};
    use serde::Serialize;
    use std::time::Duration;
    use thiserror::Error;

    /// Environment variable naming the suggestion endpoint.
    pub const ENDPOINT_ENV: &str = "LINEUP_SUGGEST_URL";
    /// Environment variable holding the bearer token, if the endpoint
    /// wants one.
    pub const API_KEY_ENV: &str = "LINEUP_SUGGEST_API_KEY";

    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    #[derive(Error, Debug)]
    enum SuggestError {
        #[error("http request failed: {0}")]
        Http(#[from] reqwest::Error),

        #[error("unexpected status {0}")]
        UnexpectedStatus(reqwest::StatusCode),
    }

    #[derive(Serialize)]
    struct SuggestRequest<'a> {
        prompt: String,
        count: usize,
        sport: &'a str,
    }

    /// Text-generation-backed suggester. Sends one prompt per call and
    /// expects the endpoint to answer with a JSON array of
    /// `{name, position, number}` objects.
    pub struct HttpSuggester {
        client: reqwest::blocking::Client,
        endpoint: String,
        api_key: Option<String>,
    }

    impl HttpSuggester {
        pub fn new(endpoint: impl Into<String>) -> Self {
            let client = reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default();
            Self { client, endpoint: endpoint.into(), api_key: None }
        }

        pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
            self.api_key = Some(key.into());
            self
        }

        /// Build from `LINEUP_SUGGEST_URL` / `LINEUP_SUGGEST_API_KEY`.
        /// `None` when no endpoint is configured.
        pub fn from_env() -> Option<Self> {
            let endpoint = std::env::var(ENDPOINT_ENV).ok()?;
            let suggester = Self::new(endpoint);
            match std::env::var(API_KEY_ENV) {
                Ok(key) if !key.is_empty() => Some(suggester.with_api_key(key)),
                _ => Some(suggester),
            }
        }

        fn request(
            &self,
            sport_name: &str,
            count: usize,
        ) -> Result<Vec<SuggestedPlayer>, SuggestError> {
            let body = SuggestRequest {
                prompt: format!(
                    "Generate a list of {} fictional but realistic player names and \
                     their typical positions for a {} team.",
                    count, sport_name
                ),
                count,
                sport: sport_name,
            };

            let mut request = self.client.post(&self.endpoint).json(&body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = request.send()?;
            if !response.status().is_success() {
                return Err(SuggestError::UnexpectedStatus(response.status()));
            }

            Ok(response.json()?)
        }
    }

    impl LineupSuggester for HttpSuggester {
        fn suggest(&self, sport_name: &str, count: usize) -> Option<Vec<SuggestedPlayer>> {
            match self.request(sport_name, count) {
                Ok(players) => Some(players),
                Err(err) => {
                    log::warn!("lineup suggestion request failed: {}", err);
                    None
                }
            }
        }
    }
}
