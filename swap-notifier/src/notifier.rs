use crate::action::Notification;
use anyhow::Context;
use reqwest::header::CONTENT_TYPE;

#[derive(Clone, Debug, Default)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Sends exactly one POST. Any response counts as delivered, the status
    /// is left to the caller.
    pub async fn notify(&self, notification: &Notification) -> anyhow::Result<reqwest::Response> {
        tracing::info!("Notifying {}", notification.url);

        let response = self
            .inner
            .post(notification.url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .json(&notification.payload)
            .send()
            .await
            .map_err(ConnectionFailed)
            .with_context(|| format!("failed to notify {}", notification.url))?;

        tracing::info!("{} responded with {}", notification.url, response.status());

        Ok(response)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("connection error")]
pub struct ConnectionFailed(#[from] reqwest::Error);
