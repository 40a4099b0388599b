//! Remote score store over HTTP
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | submit | `POST {base}/api/score` with a JSON record | JSON array of records |
//! | fetch | `GET {base}/api/scores` | JSON array of records |
//!
//! Any non-2xx status is a failure.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

use crate::domain::{Leaderboard, ScoreRecord};
use crate::error::StoreError;
use crate::ports::RankedScores;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// HTTP client for the score server
pub struct HttpScoreStore {
    client: Client,
    base_url: String,
}

impl HttpScoreStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> StoreError {
        if e.is_connect() {
            StoreError::Connection(format!("Cannot connect to {}", self.base_url))
        } else {
            StoreError::Http(e)
        }
    }

    async fn ranked_list(response: Response) -> Result<Leaderboard, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }
        let entries: Vec<ScoreRecord> = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        Ok(Leaderboard::from_ranked(entries))
    }
}

#[async_trait]
impl RankedScores for HttpScoreStore {
    async fn submit(&self, record: &ScoreRecord) -> Result<Leaderboard, StoreError> {
        let url = self.endpoint("/api/score");
        debug!(url = %url, score = record.score, "Submitting score");

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::ranked_list(response).await
    }

    async fn fetch(&self) -> Result<Leaderboard, StoreError> {
        let url = self.endpoint("/api/scores");
        debug!(url = %url, "Fetching leaderboard");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Self::ranked_list(response).await
    }
}
