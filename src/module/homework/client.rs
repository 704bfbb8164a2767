///! Practicum homework statuses API client
///!
///! One authorized GET per polling cycle. The body is decoded to a raw
///! JSON value only; shape validation lives in [`super::parser`].

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::BotError;

/// Source of poll responses. The production implementation talks to the
/// Practicum API; tests script their own.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, BotError>;
}

/// HTTP client for the homework statuses endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent("homework-bot/0.1")
                .build()
                .expect("Failed to build reqwest client"),
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        }
    }

    fn connectivity(&self, source: reqwest::Error) -> BotError {
        BotError::Connectivity {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    /// GET the statuses updated since `from_date`. A watermark of zero (or
    /// less) is treated as unset and replaced with the current Unix time.
    async fn fetch(&self, from_date: i64) -> Result<Value, BotError> {
        let from_date = if from_date > 0 {
            from_date
        } else {
            Utc::now().timestamp()
        };

        tracing::info!("Requesting {} with from_date={}", self.endpoint, from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| self.connectivity(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::ApiAnswer(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BotError::Decode(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| BotError::Decode(e.to_string()))
    }
}
