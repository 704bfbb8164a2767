///! Telegram Bot API message sender
///!
///! Best-effort transport: a failed send is logged and swallowed so the
///! polling loop never dies on a notification problem.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::BotError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Sink for outgoing chat messages. Infallible by contract; implementations
/// handle their own transport failures.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}

/// Sends text messages to one chat via the Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self::with_api_base(TELEGRAM_API_BASE, token, chat_id)
    }

    pub fn with_api_base(api_base: &str, token: &str, chat_id: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    async fn send(&self, text: &str) -> Result<(), BotError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| BotError::Notify(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Notify(format!(
                "telegram answered HTTP {status}: {body}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) {
        match self.send(text).await {
            Ok(()) => tracing::debug!("Sent telegram message: {text:?}"),
            Err(e) => tracing::error!("Could not deliver telegram message: {e}"),
        }
    }
}
