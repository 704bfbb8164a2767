///! Polling loop controller
///!
///! Drives the fetch → validate → parse → notify cycle on a fixed period.
///! Owns the two pieces of loop state: the `from_date` watermark and the
///! last message sent. Consecutive identical messages (status texts and
///! failure diagnostics alike) are sent only once.

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use crate::error::BotError;
use crate::module::homework::HomeworkApi;
use crate::module::homework::parser::{check_response, parse_status};
use crate::module::telegram::Notifier;

pub struct Poller<A, N> {
    api: A,
    notifier: N,
    retry_period: Duration,
    from_date: i64,
    last_message: String,
}

impl<A: HomeworkApi, N: Notifier> Poller<A, N> {
    pub fn new(api: A, notifier: N, retry_period: Duration) -> Self {
        Self {
            api,
            notifier,
            retry_period,
            from_date: Utc::now().timestamp(),
            last_message: String::new(),
        }
    }

    /// Run cycles until the task is dropped or aborted. The sleep is
    /// unconditional: every cycle, failed or not, is followed by the same
    /// fixed pause.
    pub async fn run(&mut self) {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One polling cycle. Never fails: any pipeline error becomes a
    /// (deduplicated) diagnostic notification.
    pub async fn run_cycle(&mut self) {
        match self.poll().await {
            Ok(Some(message)) => {
                tracing::info!("{message}");
                self.send_if_new(message).await;
            }
            Ok(None) => tracing::info!("Homework status not updated"),
            Err(e) => {
                tracing::error!("Polling cycle failed: {e}");
                self.send_if_new(format!("Сбой в работе программы: {e}")).await;
            }
        }
    }

    /// Fetch and interpret one response. `Ok(None)` means the homework list
    /// was empty, so there is nothing to report.
    async fn poll(&mut self) -> Result<Option<String>, BotError> {
        let body = self.api.fetch(self.from_date).await?;

        // The watermark advances whenever the server supplied one, even if
        // the rest of the body turns out to be malformed.
        if let Some(timestamp) = body.get("current_date").and_then(Value::as_i64) {
            self.from_date = timestamp;
        }

        let response = check_response(&body)?;
        match response.homeworks.first() {
            Some(record) => Ok(Some(parse_status(record)?)),
            None => Ok(None),
        }
    }

    async fn send_if_new(&mut self, message: String) {
        if message == self.last_message {
            tracing::debug!("Suppressing repeated message: {message:?}");
            return;
        }
        self.notifier.notify(&message).await;
        self.last_message = message;
    }
}
