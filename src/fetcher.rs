use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::redirect::Policy;

use crate::config::ServerConfig;

/// The only way a status fetch can fail.
///
/// DNS errors, refused connections, timeouts and non-2xx responses all
/// collapse into this one kind; the underlying cause is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("status unavailable")]
    Unavailable,
}

/// Something that can report the raw upstream status text.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<String, FetchError>;
}

/// Fetches the status with a single HTTP GET per call.
#[derive(Debug, Clone)]
pub struct HttpStatusFetcher {
    url: String,
    user_agent: String,
    accept: String,
    timeout: Duration,
}

impl HttpStatusFetcher {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            url: config.status_url.clone(),
            user_agent: config.user_agent.clone(),
            accept: config.accept.clone(),
            timeout: config.request_timeout,
        }
    }

    async fn get(&self) -> Result<Option<String>, reqwest::Error> {
        // A new client per call: no pooled connection outlives the request.
        // Redirects are not followed, so one fetch is one GET.
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(Policy::none())
            .build()?;

        let response = client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, &self.accept)
            .send()
            .await?;

        // Anything outside 2xx, 3xx included, is a failed fetch.
        if !response.status().is_success() {
            return Ok(None);
        }

        response.text().await.map(Some)
    }
}

#[async_trait]
impl StatusSource for HttpStatusFetcher {
    async fn fetch_status(&self) -> Result<String, FetchError> {
        match self.get().await {
            Ok(Some(body)) => Ok(body),
            Ok(None) | Err(_) => {
                tracing::debug!(url = %self.url, "status fetch unavailable");
                Err(FetchError::Unavailable)
            }
        }
    }
}
