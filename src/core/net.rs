// src/core/net.rs
//
// Blocking HTTP GET, one attempt per URL. The ETL only talks to the network
// through `HttpSource`, so tests can feed it canned pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// Could not reach the host at all (DNS, refused, TLS, timeout).
    #[error("cannot reach {url}: {reason}")]
    Unreachable { url: String, reason: String },
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("failed to read body of {url}: {reason}")]
    Body { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

pub trait HttpSource {
    fn get_text(&self, url: &str) -> Result<String, NetError>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, NetError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NetError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpSource for HttpClient {
    fn get_text(&self, url: &str) -> Result<String, NetError> {
        logd!("HTTP: GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| NetError::Unreachable { url: s!(url), reason: e.to_string() })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text()
            .map_err(|e| NetError::Body { url: s!(url), reason: e.to_string() })
    }
}
