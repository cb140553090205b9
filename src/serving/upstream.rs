use crate::errors::{ErrorKind, Result};
use crate::serving::ua::basic_ua;
use actix_web::client::{Client, SendRequestError};
use actix_web::http::header;
use async_trait::async_trait;
use humantime::format_duration;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Upper bound for an upstream response body.
const MAX_BODY_SIZE: usize = 10_000_000;

/// Source of upstream XML documents.
#[async_trait(?Send)]
pub trait Upstream {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub type SharedUpstream = Arc<dyn Upstream + Send + Sync>;

/// Fetches over HTTP with the awc client.
pub struct HttpUpstream {
    timeout: Duration,
}

impl HttpUpstream {
    pub fn new(timeout_secs: u64) -> HttpUpstream {
        HttpUpstream {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait(?Send)]
impl Upstream for HttpUpstream {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let start = Instant::now();
        debug!(target: "surveys", "Fetching {}", url);

        let client = Client::default();
        let response = client
            .get(url)
            .timeout(self.timeout)
            .header(header::USER_AGENT, basic_ua())
            .send()
            .await;

        let mut response = match response {
            Ok(response) => response,
            Err(SendRequestError::Timeout) => {
                warn!(target: "surveys", "Timeout fetching {}", url);
                bail!(ErrorKind::Timeout)
            }
            Err(e) => {
                warn!(target: "surveys", "Error fetching {}: {}", url, e);
                bail!(ErrorKind::UpstreamUnavailable(e.to_string()))
            }
        };

        if !response.status().is_success() {
            bail!(ErrorKind::UpstreamUnavailable(format!(
                "{} answered with status {}",
                url,
                response.status()
            )))
        }

        let body = response
            .body()
            .limit(MAX_BODY_SIZE)
            .await
            .map_err(|e| ErrorKind::UpstreamUnavailable(format!("reading body: {}", e)))?;

        debug!(
            target: "surveys",
            "Fetched {} ({} bytes) in {}",
            url,
            body.len(),
            format_duration(start.elapsed())
        );

        Ok(body.to_vec())
    }
}
